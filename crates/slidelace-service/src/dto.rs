//! Request and response types for the service boundary.
//!
//! States cross the wire as flat row-major integer sequences, exactly as
//! the core models them; solutions are sequences of such states.

use serde::{Deserialize, Serialize};

/// Request body for the solve operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Board size; the board has `n * n` cells.
    pub n: usize,
    /// Start arrangement, row-major, `0` for the blank.
    pub state: Vec<u16>,
}

/// Response body for the solve operation.
///
/// `success = false` with populated stats is the normal outcome for an
/// unsolvable start, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResponse {
    /// Whether a path to the goal was found.
    pub success: bool,
    /// The optimal path, start and goal inclusive; absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<Vec<Vec<u16>>>,
    /// Search statistics, populated in either case.
    pub stats: SolveStats,
}

/// Search statistics in the original wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Optimal path length minus one, or 0 on failure.
    pub steps: usize,
    /// Peak frontier size during the search.
    #[serde(rename = "spaceComplexity")]
    pub space_complexity: usize,
    /// Total distinct states admitted to the frontier.
    #[serde(rename = "timeComplexity")]
    pub time_complexity: usize,
    /// Wall-clock solve time in milliseconds.
    #[serde(rename = "time")]
    pub time_ms: f64,
}

/// Request body for the generate operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Board size; the board has `n * n` cells.
    pub n: usize,
}

/// Response body for the generate operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Always `true`; generation cannot fail for a valid size.
    pub success: bool,
    /// A guaranteed-solvable start arrangement.
    pub puzzle: Vec<u16>,
    /// Seed reproducing the puzzle, as 64 hex characters.
    pub seed: String,
}

/// Request body for the solvability check operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Board size; the board has `n * n` cells.
    pub n: usize,
    /// Arrangement to check, row-major, `0` for the blank.
    pub state: Vec<u16>,
}

/// Response body for the solvability check operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResponse {
    /// Always `true`; the check itself cannot fail for valid input.
    pub success: bool,
    /// Whether the supplied arrangement can reach the goal.
    #[serde(rename = "isSolvable")]
    pub is_solvable: bool,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn solve_stats_use_original_field_names() {
        let stats = SolveStats {
            steps: 4,
            space_complexity: 7,
            time_complexity: 11,
            time_ms: 1.5,
        };
        assert_eq!(
            serde_json::to_value(&stats).unwrap(),
            json!({
                "steps": 4,
                "spaceComplexity": 7,
                "timeComplexity": 11,
                "time": 1.5,
            })
        );
    }

    #[test]
    fn failed_solve_omits_solution_field() {
        let response = SolveResponse {
            success: false,
            solution: None,
            stats: SolveStats {
                steps: 0,
                space_complexity: 1,
                time_complexity: 1,
                time_ms: 0.0,
            },
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("solution").is_none());
    }

    #[test]
    fn check_response_uses_camel_case_flag() {
        let response = CheckResponse {
            success: true,
            is_solvable: false,
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "success": true, "isSolvable": false })
        );
    }

    #[test]
    fn solve_request_round_trips() {
        let text = r#"{"n":2,"state":[1,2,3,0]}"#;
        let request: SolveRequest = serde_json::from_str(text).unwrap();
        assert_eq!(request.n, 2);
        assert_eq!(request.state, vec![1, 2, 3, 0]);
    }
}
