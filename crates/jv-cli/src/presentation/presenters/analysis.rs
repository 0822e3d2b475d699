use crate::presentation::view_models::{
    AnalysisViewModel, CommandResultViewModel, ExcerptViewModel, OutcomeViewModel,
    SessionInfoViewModel, StatusBadge, TokenUsageViewModel, ToolCountViewModel,
};
use jv_engine::{DeepAnalysis, Excerpt};

fn present_excerpts(excerpts: Vec<Excerpt>) -> Vec<ExcerptViewModel> {
    excerpts
        .into_iter()
        .map(|e| ExcerptViewModel {
            position: e.position,
            text: e.text,
        })
        .collect()
}

pub fn present_analysis(analysis: DeepAnalysis) -> CommandResultViewModel<AnalysisViewModel> {
    let session = analysis.session.map(|s| SessionInfoViewModel {
        model: s.model,
        version: s.version,
        cwd: s.cwd,
        tool_count: s.tool_count,
    });

    let outcome = analysis.outcome.map(|o| OutcomeViewModel {
        success: o.success,
        duration_secs: o.duration_secs,
        num_turns: o.num_turns,
        total_cost_usd: o.total_cost_usd,
        usage: TokenUsageViewModel {
            input_tokens: o.usage.input_tokens,
            output_tokens: o.usage.output_tokens,
            cache_read_input_tokens: o.usage.cache_read_input_tokens,
            cache_creation_input_tokens: o.usage.cache_creation_input_tokens,
        },
    });

    let content = AnalysisViewModel {
        session,
        outcome,
        tools: analysis
            .tools
            .into_iter()
            .map(|c| ToolCountViewModel {
                name: c.key,
                count: c.count,
            })
            .collect(),
        errors: present_excerpts(analysis.errors),
        thoughts: present_excerpts(analysis.thoughts),
    };

    CommandResultViewModel::new(content).with_badge(StatusBadge::info("Claude Code log analysis"))
}
