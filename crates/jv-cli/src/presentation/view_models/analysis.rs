use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisViewModel {
    pub session: Option<SessionInfoViewModel>,
    pub outcome: Option<OutcomeViewModel>,
    pub tools: Vec<ToolCountViewModel>,
    pub errors: Vec<ExcerptViewModel>,
    pub thoughts: Vec<ExcerptViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionInfoViewModel {
    pub model: Option<String>,
    pub version: Option<String>,
    pub cwd: Option<String>,
    pub tool_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutcomeViewModel {
    pub success: bool,
    pub duration_secs: f64,
    pub num_turns: Option<String>,
    pub total_cost_usd: f64,
    pub usage: TokenUsageViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenUsageViewModel {
    pub input_tokens: Value,
    pub output_tokens: Value,
    pub cache_read_input_tokens: Value,
    pub cache_creation_input_tokens: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolCountViewModel {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExcerptViewModel {
    pub position: usize,
    pub text: String,
}
