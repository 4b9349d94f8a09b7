// ============================================================
// Layer 3: QaPair Domain Type
// ============================================================
// A single question/answer row of the corpus, plus the
// column-wise view of many rows that the extractor produces.
//
// Example row:
//   Question: "2+2?"
//   Answer:   "4"

use serde::{Deserialize, Serialize};

/// Header name of the question column
pub const QUESTION_COLUMN: &str = "Question";

/// Header name of the answer column
pub const ANSWER_COLUMN: &str = "Answer";

/// One labelled question/answer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    #[serde(rename = "Question")]
    pub question: String,

    #[serde(rename = "Answer")]
    pub answer: String,
}

impl QaPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer:   answer.into(),
        }
    }
}

/// Questions and answers of a partition as two parallel sequences.
/// Index `i` of both vectors comes from the same source row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QaColumns {
    pub questions: Vec<String>,
    pub answers:   Vec<String>,
}

impl QaColumns {
    pub fn push(&mut self, pair: QaPair) {
        self.questions.push(pair.question);
        self.answers.push(pair.answer);
    }

    /// Number of rows (both columns always have the same length)
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl FromIterator<QaPair> for QaColumns {
    fn from_iter<I: IntoIterator<Item = QaPair>>(iter: I) -> Self {
        let mut columns = QaColumns::default();
        for pair in iter {
            columns.push(pair);
        }
        columns
    }
}
