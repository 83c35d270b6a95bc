//! Response shape of the external random number generator

use serde::{Deserialize, Serialize};

/// One draw as returned by the generator.
///
/// The generator answers with a JSON array; only its first element is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResponse {
    #[serde(default, alias = "Status")]
    pub status: String,
    #[serde(default, alias = "Min")]
    pub min: i32,
    #[serde(default, alias = "Max")]
    pub max: i32,
    #[serde(default, alias = "Random")]
    pub random: i32,
}

impl DrawResponse {
    /// Whether the generator reported a successful draw
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generator_payload() {
        let body = r#"[{"status":"success","min":1,"max":1000,"random":417}]"#;
        let draws: Vec<DrawResponse> = serde_json::from_str(body).unwrap();

        assert_eq!(draws.len(), 1);
        assert!(draws[0].is_success());
        assert_eq!(draws[0].random, 417);
    }

    #[test]
    fn test_pascal_case_aliases() {
        let body = r#"{"Status":"success","Min":5,"Max":9,"Random":7}"#;
        let draw: DrawResponse = serde_json::from_str(body).unwrap();
        assert_eq!(draw.min, 5);
        assert_eq!(draw.max, 9);
    }

    #[test]
    fn test_error_status_is_not_success() {
        let body = r#"{"status":"error","code":"5","reason":"Too many requests"}"#;
        let draw: DrawResponse = serde_json::from_str(body).unwrap();
        assert!(!draw.is_success());
    }
}
