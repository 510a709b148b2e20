//! Automation records: start an execution and describe executions.

wire_enum! {
    pub enum AutomationExecutionStatus {
        Pending => "Pending",
        InProgress => "InProgress",
        Waiting => "Waiting",
        Success => "Success",
        TimedOut => "TimedOut",
        Cancelling => "Cancelling",
        Cancelled => "Cancelled",
        Failed => "Failed",
    }
}

wire_enum! {
    pub enum AutomationExecutionFilterKey {
        DocumentNamePrefix => "DocumentNamePrefix",
        ExecutionStatus => "ExecutionStatus",
        ExecutionId => "ExecutionId",
        ParentExecutionId => "ParentExecutionId",
        CurrentAction => "CurrentAction",
        StartTimeBefore => "StartTimeBefore",
        StartTimeAfter => "StartTimeAfter",
    }
}

dto! {
    pub struct AutomationExecutionFilter {
        key: scalar AutomationExecutionFilterKey => "Key",
        values: list String => "Values",
    }
}

dto! {
    pub struct StartAutomationExecutionRequest {
        document_name: scalar String => "DocumentName",
        document_version: scalar String => "DocumentVersion",
        parameters: map Vec<String> => "Parameters",
        mode: scalar String => "Mode",
        max_concurrency: scalar String => "MaxConcurrency",
        max_errors: scalar String => "MaxErrors",
    }
}

dto! {
    pub struct StartAutomationExecutionResult {
        automation_execution_id: scalar String => "AutomationExecutionId",
    }
}

dto! {
    /// Summary row returned by describe; the full step list only comes back
    /// from a get on a single execution.
    pub struct AutomationExecutionMetadata {
        automation_execution_id: scalar String => "AutomationExecutionId",
        document_name: scalar String => "DocumentName",
        document_version: scalar String => "DocumentVersion",
        automation_execution_status: scalar AutomationExecutionStatus => "AutomationExecutionStatus",
        execution_start_time: scalar String => "ExecutionStartTime",
        execution_end_time: scalar String => "ExecutionEndTime",
        executed_by: scalar String => "ExecutedBy",
        mode: scalar String => "Mode",
        outputs: map Vec<String> => "Outputs",
    }
}

dto! {
    pub struct DescribeAutomationExecutionsRequest {
        filters: list AutomationExecutionFilter => "Filters",
        max_results: scalar i64 => "MaxResults",
        next_token: scalar String => "NextToken",
    }
}

dto! {
    pub struct DescribeAutomationExecutionsResult {
        automation_execution_metadata_list: list AutomationExecutionMetadata => "AutomationExecutionMetadataList",
        next_token: scalar String => "NextToken",
    }
}

impl_paged!(request DescribeAutomationExecutionsRequest);
impl_paged!(result DescribeAutomationExecutionsResult);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_status_round_trips() {
        for status in &[
            AutomationExecutionStatus::Pending,
            AutomationExecutionStatus::InProgress,
            AutomationExecutionStatus::Waiting,
            AutomationExecutionStatus::Success,
            AutomationExecutionStatus::TimedOut,
            AutomationExecutionStatus::Cancelling,
            AutomationExecutionStatus::Cancelled,
            AutomationExecutionStatus::Failed,
        ] {
            assert_eq!(
                AutomationExecutionStatus::from_value(status.as_str()).unwrap(),
                *status
            );
        }
        assert!(AutomationExecutionStatus::from_value("").is_err());
    }

    #[test]
    fn filter_key_parses_from_wire_and_from_str() {
        assert_eq!(
            "ExecutionStatus".parse::<AutomationExecutionFilterKey>().unwrap(),
            AutomationExecutionFilterKey::ExecutionStatus
        );
        assert!("execution-status".parse::<AutomationExecutionFilterKey>().is_err());
    }

    #[test]
    fn start_request_parameters_reject_duplicates() {
        let mut request = StartAutomationExecutionRequest::new()
            .with_document_name("AWS-RestartEC2Instance".to_string());
        request
            .add_parameters_entry("InstanceId", vec!["i-0123".to_string()])
            .unwrap();
        assert!(request
            .add_parameters_entry("InstanceId", vec!["i-4567".to_string()])
            .is_err());
    }

    #[test]
    fn describe_result_decodes_enum_typed_fields() {
        let raw = r#"{
            "AutomationExecutionMetadataList": [{
                "AutomationExecutionId": "a-1",
                "AutomationExecutionStatus": "InProgress"
            }]
        }"#;
        let result: DescribeAutomationExecutionsResult = serde_json::from_str(raw).unwrap();
        let rows = result.automation_execution_metadata_list().unwrap();
        assert_eq!(
            rows[0].automation_execution_status(),
            Some(&AutomationExecutionStatus::InProgress)
        );
        assert_eq!(result.next_token(), None);
    }
}
