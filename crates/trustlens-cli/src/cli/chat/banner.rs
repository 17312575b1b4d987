//! Welcome banner shown when the chat starts.

use console::style;

pub fn print_welcome_banner(rule_count: usize, custom_rules: bool) {
    let source = if custom_rules { "custom rule file" } else { "built-in rules" };

    println!();
    println!("  {} {}", "⚖", style("TrustLens Assistant").cyan().bold());
    println!("  {}", style("Legal help, one question at a time").dim());
    println!();
    println!(
        "  {}  {}",
        style("Rules:").bold(),
        style(format!("{rule_count} ({source})")).dim()
    );
    println!();
    println!("  {}", style("Type /help for commands, Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
    println!();
}
