use serde::{Deserialize, Deserializer, Serialize};

/// One upstream model's raw answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseItem {
    /// Identifier of the consulted model
    pub model: String,
    /// The model's answer, verbatim
    pub answer: String,
}

impl ResponseItem {
    pub fn new(model: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            answer: answer.into(),
        }
    }
}

/// The single aggregated answer of the council
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Verdict(String);

impl Verdict {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty verdict renders as "no verdict yet"
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body returned by the council endpoint
///
/// Missing or `null` fields decode as empty, so a reply without one of them
/// leaves the matching results area blank rather than failing the whole
/// request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouncilReply {
    /// Individual answers, in the order the server returned them
    #[serde(default, deserialize_with = "null_as_default")]
    pub individual_responses: Vec<ResponseItem>,
    /// Aggregated verdict
    #[serde(default, deserialize_with = "null_as_default")]
    pub council_verdict: Verdict,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CouncilReply {
    pub fn new(individual_responses: Vec<ResponseItem>, council_verdict: Verdict) -> Self {
        Self {
            individual_responses,
            council_verdict,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.individual_responses.is_empty() && self.council_verdict.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_reply() {
        let json = r#"{"individual_responses":[{"model":"A","answer":"x"}],"council_verdict":"V"}"#;
        let reply: CouncilReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.individual_responses, vec![ResponseItem::new("A", "x")]);
        assert_eq!(reply.council_verdict.as_str(), "V");
    }

    #[test]
    fn test_decode_preserves_server_order() {
        let json = r#"{
            "individual_responses": [
                {"model": "z-model", "answer": "1"},
                {"model": "a-model", "answer": "2"},
                {"model": "m-model", "answer": "3"}
            ],
            "council_verdict": ""
        }"#;
        let reply: CouncilReply = serde_json::from_str(json).unwrap();
        let models: Vec<_> = reply
            .individual_responses
            .iter()
            .map(|r| r.model.as_str())
            .collect();
        assert_eq!(models, vec!["z-model", "a-model", "m-model"]);
    }

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let reply: CouncilReply = serde_json::from_str("{}").unwrap();
        assert!(reply.is_empty());
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let json = r#"{"individual_responses":[{"model":"A","answer":"x"}],"council_verdict":null}"#;
        let reply: CouncilReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.individual_responses, vec![ResponseItem::new("A", "x")]);
        assert!(reply.council_verdict.is_empty());

        let json = r#"{"individual_responses":null,"council_verdict":"V"}"#;
        let reply: CouncilReply = serde_json::from_str(json).unwrap();
        assert!(reply.individual_responses.is_empty());
        assert_eq!(reply.council_verdict.as_str(), "V");
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let json = r#"{"detail":"Not Found","council_verdict":"ok"}"#;
        let reply: CouncilReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.council_verdict.as_str(), "ok");
        assert!(reply.individual_responses.is_empty());
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        assert!(serde_json::from_str::<CouncilReply>("\"oops\"").is_err());
        assert!(serde_json::from_str::<CouncilReply>("<html></html>").is_err());
    }
}
