//! Built-in rule table.
//!
//! Order is priority: the first rule with a matching trigger wins, so
//! narrow topics (Indian law overview, criminal, civil) sit above the broad
//! "legal"/"document" rule, and the very permissive "ok" trigger comes last.

use trustlens_types::rule::Rule;

pub const FALLBACK_RESPONSE: &str = "I'm still learning, but I'll do my best to assist you. Can you please rephrase your question or provide more details?";

pub const GREETING_RESPONSE: &str = "Hello there! How can I assist you today?";

pub const IDENTITY_RESPONSE: &str = "I am the TrustLens AI assistant, designed to help you with legal document analysis and to provide information on legal topics.";

pub const ACKNOWLEDGEMENT_RESPONSE: &str = "Great! Is there anything else I can help you with?";

pub const LEGAL_RESPONSE: &str = "I can help with legal questions and document analysis. Please upload a document or ask a specific question about legal terms.";

pub const APP_RESPONSE: &str = "TrustLens is an AI-powered platform for legal document analysis and misinformation detection. What would you like to know about the app?";

pub const INDIAN_LAWS_RESPONSE: &str = "India's legal system is a blend of constitutional, statutory, and common law. A major recent change is the replacement of the colonial-era criminal codes with three new ones effective July 1, 2024:
*   **Bharatiya Nyaya Sanhita (BNS), 2023:** Replaces the Indian Penal Code (IPC).
*   **Bharatiya Nagarik Suraksha Sanhita (BNSS), 2023:** Replaces the Code of Criminal Procedure (CrPC).
*   **Bharatiya Sakshya Adhiniyam (BSA), 2023:** Replaces the Indian Evidence Act.

The **Constitution of India** is the supreme law, guaranteeing fundamental rights like:
*   **Article 14:** Equality before the law.
*   **Article 19:** Freedom of speech and expression.
*   **Article 21:** Right to life and personal liberty.

Other key laws include:
*   **Consumer Protection Act, 2019:** Protects consumer rights.
*   **Right to Information Act, 2005 (RTI):** Empowers citizens to access information from public authorities.
*   **Information Technology Act, 2000:** Governs cybercrime and electronic transactions.

This is a brief overview. Which area of law would you like to know more about in detail: **Civil** or **Criminal**?";

pub const CRIMINAL_LAW_RESPONSE: &str = "**Criminal Law in India** has been significantly overhauled, effective July 1, 2024. The new framework aims to modernize the justice system.

**Core Statutes:**
*   **Bharatiya Nyaya Sanhita (BNS), 2023:** Defines offenses and punishments, replacing the IPC. Key changes include new offenses for organized crime, terrorism, and mob lynching. It also introduces community service for petty offenses.
*   **Bharatiya Nagarik Suraksha Sanhita (BNSS), 2023:** Outlines the procedural aspects of criminal law, replacing the CrPC. It emphasizes the use of technology for trials and investigations, mandates forensic investigation for serious crimes, and sets timelines to expedite cases.
*   **Bharatiya Sakshya Adhiniyam (BSA), 2023:** Governs the rules of evidence, replacing the Indian Evidence Act. It notably expands the admissibility of electronic evidence.

**Key Stages of a Criminal Trial:**
1.  **FIR (First Information Report):** The process starts with the police registering an FIR.
2.  **Investigation:** Police gather evidence and may make arrests.
3.  **Charge Sheet:** A charge sheet is filed in court if there is sufficient evidence.
4.  **Trial:** The trial proceeds with the framing of charges, examination of witnesses, and final arguments.
5.  **Judgment:** The court delivers a judgment of acquittal or conviction.";

pub const CIVIL_LAW_RESPONSE: &str = "**Civil Law in India** governs disputes between private individuals or organizations. The primary goal is to provide a remedy, such as compensation, rather than punishment.

**Core Statutes:**
*   **Code of Civil Procedure, 1908 (CPC):** Outlines the procedure for conducting civil suits.
*   **Indian Contract Act, 1872:** Governs the formation and enforcement of contracts.
*   **Transfer of Property Act, 1882:** Deals with the transfer of property between living persons.
*   **Personal Laws:** Matters like marriage, divorce, and inheritance are governed by personal laws specific to different religious communities (e.g., Hindu Marriage Act, 1955, Muslim Personal Law). The **Special Marriage Act, 1954** offers a secular alternative.

**Key Branches of Civil Law:**
*   **Contract Law:** Deals with agreements and their breaches.
*   **Property Law:** Governs ownership and transfer of property.
*   **Family Law:** Pertains to marriage, divorce, adoption, and inheritance.
*   **Law of Torts:** Addresses civil wrongs that cause harm or loss, such as negligence or defamation.

**Key Stages of a Civil Suit:**
1.  **Filing a Plaint:** The plaintiff initiates the suit by filing a complaint.
2.  **Summons:** The court issues a summons to the defendant.
3.  **Pleadings:** Both parties file their written statements.
4.  **Trial:** The court frames issues, and both parties present evidence.
5.  **Judgment and Decree:** The court delivers a judgment, followed by a formal decree.";

/// The default rule table, highest priority first.
///
/// `ok` is checked last because it is a substring of many words ("book",
/// "token") and a common lead-in: "ok, tell me about civil law" gets the
/// civil-law reply, not the acknowledgement. The web client checked `ok`
/// third, ahead of `indian laws`, `legal` and `app`.
pub fn builtin_rules() -> Vec<Rule> {
    vec![
        Rule::new(["hello"], GREETING_RESPONSE),
        Rule::new(["who are you"], IDENTITY_RESPONSE),
        Rule::new(["indian laws", "laws in india"], INDIAN_LAWS_RESPONSE),
        Rule::new(["criminal"], CRIMINAL_LAW_RESPONSE),
        Rule::new(["civil"], CIVIL_LAW_RESPONSE),
        Rule::new(["legal", "document"], LEGAL_RESPONSE),
        Rule::new(["app", "trustlens"], APP_RESPONSE),
        Rule::new(["ok"], ACKNOWLEDGEMENT_RESPONSE),
    ]
}
