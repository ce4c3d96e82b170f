use laneboard_types::{ContentBlock, InteractionRecord, SessionStats};

/// Reduce a session's records to its statistics summary in one linear pass.
///
/// Signals are independent and additive: a single record can bump
/// `error_count` or `tool_count` several times through distinct rules, and
/// no deduplication is performed. Records missing optional fields simply
/// contribute nothing.
pub fn aggregate_records(records: &[InteractionRecord]) -> SessionStats {
    let mut stats = SessionStats::default();

    for record in records {
        if let Some(usage) = &record.usage {
            stats.input_tokens += usage.input_tokens;
            stats.output_tokens += usage.output_tokens;
            stats.total_tokens += usage.input_tokens + usage.output_tokens;
        }

        if let Some(duration) = record.duration_ms {
            stats.duration_ms += duration;
        }

        if record.stop_reason_is_error() {
            stats.error_count += 1;
        }

        if record.tool_use.is_some() {
            stats.tool_count += 1;
        }

        if let Some(outcome) = &record.tool_result
            && outcome.failed()
        {
            stats.error_count += 1;
        }

        for block in &record.content {
            match block {
                ContentBlock::ToolUse { .. } => stats.tool_count += 1,
                ContentBlock::ToolResult(result) => {
                    if result.is_error {
                        stats.error_count += 1;
                    }
                    if result.nested_failure {
                        stats.error_count += 1;
                    }
                }
                ContentBlock::Text { .. } => {}
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use laneboard_types::{Role, TokenUsage, ToolOutcome, ToolResultBlock, ToolUse};
    use uuid::Uuid;

    fn record(role: Role) -> InteractionRecord {
        InteractionRecord::new(Uuid::new_v4(), role)
    }

    #[test]
    fn empty_session_yields_default_stats() {
        assert_eq!(aggregate_records(&[]), SessionStats::default());
    }

    #[test]
    fn token_totals_accumulate_from_usage_bearing_records_only() {
        let mut with_usage = record(Role::Assistant);
        with_usage.usage = Some(TokenUsage {
            input_tokens: 100,
            output_tokens: 40,
        });
        let mut second = record(Role::Assistant);
        second.usage = Some(TokenUsage {
            input_tokens: 7,
            output_tokens: 3,
        });
        let without = record(Role::User);

        let stats = aggregate_records(&[with_usage, without, second]);
        assert_eq!(stats.input_tokens, 107);
        assert_eq!(stats.output_tokens, 43);
        assert_eq!(stats.total_tokens, stats.input_tokens + stats.output_tokens);
    }

    #[test]
    fn worked_example_from_three_records() {
        // [{role:user}, {role:assistant, usage:{10,5}},
        //  {role:assistant, tool_result:{is_error:true}}]
        let user = record(Role::User);
        let mut assistant = record(Role::Assistant);
        assistant.usage = Some(TokenUsage {
            input_tokens: 10,
            output_tokens: 5,
        });
        let mut failed = record(Role::Assistant);
        failed.tool_result = Some(ToolOutcome {
            is_error: true,
            stderr: None,
        });

        let stats = aggregate_records(&[user, assistant, failed]);
        assert_eq!(
            stats,
            SessionStats {
                total_tokens: 15,
                input_tokens: 10,
                output_tokens: 5,
                error_count: 1,
                duration_ms: 0,
                tool_count: 0,
            }
        );
    }

    #[test]
    fn error_signals_are_additive_within_one_record() {
        let mut record = record(Role::Assistant);
        record.stop_reason = Some("tool error".to_string());
        record.tool_result = Some(ToolOutcome {
            is_error: false,
            stderr: Some("boom".to_string()),
        });
        record.content = vec![ContentBlock::ToolResult(ToolResultBlock {
            is_error: true,
            nested_failure: true,
        })];

        // stop reason + top-level stderr + block error flag + nested failure
        let stats = aggregate_records(std::slice::from_ref(&record));
        assert_eq!(stats.error_count, 4);
    }

    #[test]
    fn tool_count_sums_top_level_and_nested_uses() {
        let mut record = record(Role::Assistant);
        record.tool_use = Some(ToolUse {
            name: "Bash".to_string(),
        });
        record.content = vec![
            ContentBlock::ToolUse {
                name: "Read".to_string(),
            },
            ContentBlock::Text {
                text: "done".to_string(),
            },
            ContentBlock::ToolUse {
                name: "Write".to_string(),
            },
        ];

        let stats = aggregate_records(&[record]);
        assert_eq!(stats.tool_count, 3);
        assert_eq!(stats.error_count, 0);
    }

    #[test]
    fn durations_accumulate() {
        let mut a = record(Role::Assistant);
        a.duration_ms = Some(1_200);
        let mut b = record(Role::Assistant);
        b.duration_ms = Some(300);

        let stats = aggregate_records(&[a, b]);
        assert_eq!(stats.duration_ms, 1_500);
    }

    #[test]
    fn empty_stderr_is_not_an_error() {
        let mut record = record(Role::Assistant);
        record.tool_result = Some(ToolOutcome {
            is_error: false,
            stderr: Some(String::new()),
        });

        let stats = aggregate_records(&[record]);
        assert_eq!(stats.error_count, 0);
    }
}
