use std::sync::LazyLock;

use regex::Regex;

use crate::application::ports::{LlmClient, LlmClientError};

const QUERY_TRIGGERS: [&str; 6] = [
    "medicine",
    "dosage",
    "prescription",
    "extract",
    "drug",
    "medication",
];
const CONTEXT_TRIGGERS: [&str; 8] = [
    "pharmacy",
    "prescription",
    "medicine",
    "tablet",
    "capsule",
    "mg",
    "doctor",
    "patient",
];
const MEDICATION_MARKERS: [&str; 9] = [
    "tablet", "capsule", "mg", "ml", "dose", "take", "daily", "twice", "once",
];
const PRESCRIBER_MARKERS: [&str; 3] = ["dr.", "doctor", "md"];

static STREET_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+.*(?:[Aa]venue|[Ss]treet|[Rr]oad)").unwrap());
static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{3}[-.]\d{4}\b").unwrap());
static PERSON_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z]+,?\s+[A-Z][a-z]+").unwrap());
static CALENDAR_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}/\d{1,2}/\d{2,4}\b").unwrap());

/// Offline language-model collaborator.
///
/// Replies in the `Answer:` / `Explanation:` layout the retrieval service
/// parses. Prescription-like requests get a structured analysis of the
/// first context line instead.
#[derive(Debug, Default)]
pub struct SimulatedLlmClient;

impl SimulatedLlmClient {
    pub fn new() -> Self {
        Self
    }

    fn is_prescription_request(query: &str, context: &[String]) -> bool {
        let query = query.to_lowercase();
        if QUERY_TRIGGERS.iter().any(|t| query.contains(t)) {
            return true;
        }

        let context = context.join(" ").to_lowercase();
        CONTEXT_TRIGGERS.iter().any(|t| context.contains(t))
    }

    fn simulated_answer(query: &str) -> String {
        format!(
            "Answer:\nBased on your documents, here's what I found about '{query}'.\n\n\
             Explanation:\n\nCore Concepts:\n\n\
             • Main concept related to your query\n\
             \x20 - Key explanation based on document content\n\
             \x20 - Important details from the analysis\n\n\
             • Secondary concept\n\
             \x20 - Supporting information\n\
             \x20 - Additional context\n\n\
             Key Considerations:\n\n\
             • Important point 1\n\n\
             • Important point 2\n\n\
             • Important point 3\n"
        )
    }

    fn prescription_analysis(context: &[String]) -> String {
        let text = context.first().map(String::as_str).unwrap_or_default();
        let mut analysis = String::from("PRESCRIPTION ANALYSIS RESULTS\n\n");

        let sections = [
            ("PHARMACY INFORMATION", pharmacy_details(text)),
            ("PATIENT INFORMATION", patient_details(text)),
            ("MEDICATION DETAILS", medication_details(text)),
            ("PRESCRIBER INFORMATION", prescriber_details(text)),
        ];
        for (title, lines) in sections {
            if !lines.is_empty() {
                analysis.push_str(&format!("{title}:\n{}\n\n", bullets(&lines)));
            }
        }

        analysis.push_str(
            "IMPORTANT SAFETY NOTES:\n\
             • Always follow the prescribed dosage and frequency\n\
             • Consult your doctor before making any changes\n\
             • Check for drug interactions with other medications\n\
             • Contact your pharmacist for any questions\n\n\
             If you have concerns about this prescription, please contact your \
             healthcare provider or pharmacist immediately.",
        );

        analysis
    }
}

fn bullets(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!("• {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn first_line_matching(text: &str, predicate: impl Fn(&str) -> bool) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| predicate(line))
        .map(str::to_string)
}

fn pharmacy_details(text: &str) -> Vec<String> {
    let mut details = Vec::new();

    if let Some(line) = first_line_matching(text, |l| l.to_lowercase().contains("pharmacy")) {
        details.push(line);
    }
    if let Some(line) = first_line_matching(text, |l| STREET_ADDRESS.is_match(l)) {
        details.push(format!("Address: {line}"));
    }
    if let Some(phone) = PHONE_NUMBER.find(text) {
        details.push(format!("Phone: {}", phone.as_str()));
    }

    details
}

fn patient_details(text: &str) -> Vec<String> {
    let mut details = Vec::new();

    if let Some(line) = first_line_matching(text, |l| {
        PERSON_NAME.is_match(l) && !l.to_lowercase().contains("pharmacy")
    }) {
        details.push(format!("Patient: {line}"));
    }
    if let Some(date) = CALENDAR_DATE.find(text) {
        details.push(format!("Date: {}", date.as_str()));
    }

    details
}

fn medication_details(text: &str) -> Vec<String> {
    let lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() > 5)
        .filter(|line| {
            let lower = line.to_lowercase();
            MEDICATION_MARKERS.iter().any(|m| lower.contains(m))
        })
        .map(str::to_string)
        .collect();

    if lines.is_empty() {
        return vec![
            "Medication details not clearly readable in the prescription".to_string(),
            "Please verify medication names and dosages with your pharmacist".to_string(),
        ];
    }

    lines
}

fn prescriber_details(text: &str) -> Vec<String> {
    let line = first_line_matching(text, |l| {
        let lower = l.to_lowercase();
        PRESCRIBER_MARKERS.iter().any(|m| lower.contains(m))
    });

    vec![line.unwrap_or_else(|| "Doctor information not clearly visible in prescription".to_string())]
}

#[async_trait::async_trait]
impl LlmClient for SimulatedLlmClient {
    async fn generate(
        &self,
        query: &str,
        context: &[String],
        sources: &[String],
    ) -> Result<String, LlmClientError> {
        let reply = if Self::is_prescription_request(query, context) {
            Self::prescription_analysis(context)
        } else {
            Self::simulated_answer(query)
        };

        tracing::debug!(
            reply_length = reply.chars().count(),
            source_count = sources.len(),
            "Simulated reply generated"
        );

        Ok(reply)
    }

    async fn health_check(&self) -> Result<(), LlmClientError> {
        Ok(())
    }
}
