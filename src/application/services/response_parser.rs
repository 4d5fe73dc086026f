const ANSWER_MARKER: &str = "Answer:";
const EXPLANATION_MARKER: &str = "Explanation:";
const CROSS_DOCUMENT_MARKER: &str = "Cross-Document Analysis:";

const DEFAULT_ANSWER: &str = "Based on your document(s), here's what I found about your question.";
const MISSING_ANSWER: &str = "Unable to generate answer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReply {
    pub answer: String,
    pub explanation: String,
    pub cross_document_analysis: String,
}

/// Splits a model reply on its `Answer:` / `Explanation:` /
/// `Cross-Document Analysis:` markers. A reply without an answer marker is
/// kept whole as the explanation under a generic answer.
pub fn parse_formatted_reply(reply: &str) -> ParsedReply {
    let mut answer = "";
    let mut explanation = "";
    let mut cross_document_analysis = "";

    if let Some((_, after_answer)) = reply.split_once(ANSWER_MARKER) {
        match after_answer.split_once(EXPLANATION_MARKER) {
            Some((answer_part, after_explanation)) => {
                answer = answer_part.trim();
                match after_explanation.split_once(CROSS_DOCUMENT_MARKER) {
                    Some((explanation_part, cross_part)) => {
                        explanation = explanation_part.trim();
                        cross_document_analysis = cross_part.trim();
                    }
                    None => explanation = after_explanation.trim(),
                }
            }
            None => answer = after_answer.trim(),
        }
    }

    if answer.is_empty() && explanation.is_empty() {
        return ParsedReply {
            answer: DEFAULT_ANSWER.to_string(),
            explanation: reply.to_string(),
            cross_document_analysis: cross_document_analysis.to_string(),
        };
    }

    ParsedReply {
        answer: if answer.is_empty() {
            MISSING_ANSWER.to_string()
        } else {
            answer.to_string()
        },
        explanation: if explanation.is_empty() {
            reply.to_string()
        } else {
            explanation.to_string()
        },
        cross_document_analysis: cross_document_analysis.to_string(),
    }
}
