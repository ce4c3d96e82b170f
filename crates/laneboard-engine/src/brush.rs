use laneboard_types::{BrushCriterion, InteractionRecord, StatusBrush, ToolBrush};

/// Error signal used by the status brush: an error-tagged stop reason, an
/// explicitly failed tool result, or tool stderr output.
pub fn record_has_error(record: &InteractionRecord) -> bool {
    record.stop_reason_is_error()
        || record
            .tool_result
            .as_ref()
            .is_some_and(|outcome| outcome.failed())
}

/// Evaluate the shared brush criterion against one record.
///
/// No criterion means every record is active. Evaluation is cheap enough to
/// recompute per render for each windowed record; nothing is cached.
pub fn record_is_active(brush: Option<&BrushCriterion>, record: &InteractionRecord) -> bool {
    let Some(brush) = brush else {
        return true;
    };

    match brush {
        BrushCriterion::Role(role) => record.role == *role,
        BrushCriterion::Status(StatusBrush::Error) => record_has_error(record),
        BrushCriterion::Tool(ToolBrush::Any) => record.tool_use.is_some(),
        BrushCriterion::Tool(ToolBrush::Named(name)) => record
            .tool_use
            .as_ref()
            .is_some_and(|tool| tool.name == *name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use laneboard_types::{Role, ToolOutcome, ToolUse};
    use uuid::Uuid;

    fn record(role: Role) -> InteractionRecord {
        InteractionRecord::new(Uuid::new_v4(), role)
    }

    fn with_tool(name: &str) -> InteractionRecord {
        let mut r = record(Role::Assistant);
        r.tool_use = Some(ToolUse {
            name: name.to_string(),
        });
        r
    }

    #[test]
    fn no_brush_activates_everything() {
        for role in [Role::User, Role::Assistant, Role::System, Role::Other] {
            assert!(record_is_active(None, &record(role)));
        }
    }

    #[test]
    fn role_brush_matches_exactly() {
        let brush = BrushCriterion::Role(Role::User);
        assert!(record_is_active(Some(&brush), &record(Role::User)));
        assert!(!record_is_active(Some(&brush), &record(Role::Assistant)));
        assert!(!record_is_active(Some(&brush), &record(Role::Other)));
    }

    #[test]
    fn status_brush_matches_each_error_signal() {
        let brush = BrushCriterion::Status(StatusBrush::Error);

        let mut stopped = record(Role::System);
        stopped.stop_reason = Some("API Error".to_string());
        assert!(record_is_active(Some(&brush), &stopped));

        let mut flagged = record(Role::Assistant);
        flagged.tool_result = Some(ToolOutcome {
            is_error: true,
            stderr: None,
        });
        assert!(record_is_active(Some(&brush), &flagged));

        let mut noisy = record(Role::Assistant);
        noisy.tool_result = Some(ToolOutcome {
            is_error: false,
            stderr: Some("permission denied".to_string()),
        });
        assert!(record_is_active(Some(&brush), &noisy));

        assert!(!record_is_active(Some(&brush), &record(Role::User)));
    }

    #[test]
    fn named_tool_brush_requires_exact_name() {
        let brush = BrushCriterion::Tool(ToolBrush::Named("Bash".to_string()));
        assert!(record_is_active(Some(&brush), &with_tool("Bash")));
        assert!(!record_is_active(Some(&brush), &with_tool("bash")));
        assert!(!record_is_active(Some(&brush), &with_tool("BashOutput")));
        assert!(!record_is_active(Some(&brush), &record(Role::Assistant)));
    }

    #[test]
    fn any_tool_brush_matches_every_tool_use() {
        let brush = BrushCriterion::Tool(ToolBrush::Any);
        assert!(record_is_active(Some(&brush), &with_tool("Bash")));
        assert!(record_is_active(Some(&brush), &with_tool("Read")));
        assert!(!record_is_active(Some(&brush), &record(Role::Assistant)));
    }
}
