//! Run Command records: send, list commands and list invocations.

use super::common::{Tag, Target};

wire_enum! {
    /// Lifecycle of a command across all of its targets.
    pub enum CommandStatus {
        Pending => "Pending",
        InProgress => "InProgress",
        Success => "Success",
        Cancelled => "Cancelled",
        Failed => "Failed",
        TimedOut => "TimedOut",
        Cancelling => "Cancelling",
    }
}

wire_enum! {
    /// Lifecycle of a command on one instance.
    pub enum CommandInvocationStatus {
        Pending => "Pending",
        InProgress => "InProgress",
        Delayed => "Delayed",
        Success => "Success",
        Cancelled => "Cancelled",
        TimedOut => "TimedOut",
        Failed => "Failed",
        Cancelling => "Cancelling",
    }
}

wire_enum! {
    pub enum NotificationEvent {
        All => "All",
        InProgress => "InProgress",
        Success => "Success",
        TimedOut => "TimedOut",
        Cancelled => "Cancelled",
        Failed => "Failed",
    }
}

wire_enum! {
    pub enum NotificationType {
        Command => "Command",
        Invocation => "Invocation",
    }
}

dto! {
    pub struct NotificationConfig {
        notification_arn: scalar String => "NotificationArn",
        notification_events: list NotificationEvent => "NotificationEvents",
        notification_type: scalar NotificationType => "NotificationType",
    }
}

dto! {
    pub struct SendCommandRequest {
        instance_ids: list String => "InstanceIds",
        targets: list Target => "Targets",
        document_name: scalar String => "DocumentName",
        document_version: scalar String => "DocumentVersion",
        timeout_seconds: scalar i64 => "TimeoutSeconds",
        comment: scalar String => "Comment",
        parameters: map Vec<String> => "Parameters",
        output_s3_bucket_name: scalar String => "OutputS3BucketName",
        output_s3_key_prefix: scalar String => "OutputS3KeyPrefix",
        max_concurrency: scalar String => "MaxConcurrency",
        max_errors: scalar String => "MaxErrors",
        notification_config: scalar NotificationConfig => "NotificationConfig",
        tags: list Tag => "Tags",
    }
}

dto! {
    pub struct SendCommandResult {
        command: scalar Command => "Command",
    }
}

dto! {
    pub struct Command {
        command_id: scalar String => "CommandId",
        document_name: scalar String => "DocumentName",
        comment: scalar String => "Comment",
        requested_date_time: scalar String => "RequestedDateTime",
        status: scalar CommandStatus => "Status",
        status_details: scalar String => "StatusDetails",
        instance_ids: list String => "InstanceIds",
        targets: list Target => "Targets",
        parameters: map Vec<String> => "Parameters",
        target_count: scalar i64 => "TargetCount",
        completed_count: scalar i64 => "CompletedCount",
        error_count: scalar i64 => "ErrorCount",
    }
}

dto! {
    pub struct CommandInvocation {
        command_id: scalar String => "CommandId",
        instance_id: scalar String => "InstanceId",
        instance_name: scalar String => "InstanceName",
        comment: scalar String => "Comment",
        document_name: scalar String => "DocumentName",
        requested_date_time: scalar String => "RequestedDateTime",
        status: scalar CommandInvocationStatus => "Status",
        status_details: scalar String => "StatusDetails",
        trace_output: scalar String => "TraceOutput",
    }
}

dto! {
    pub struct CommandFilter {
        key: scalar String => "key",
        value: scalar String => "value",
    }
}

dto! {
    pub struct ListCommandsRequest {
        command_id: scalar String => "CommandId",
        instance_id: scalar String => "InstanceId",
        filters: list CommandFilter => "Filters",
        max_results: scalar i64 => "MaxResults",
        next_token: scalar String => "NextToken",
    }
}

dto! {
    pub struct ListCommandsResult {
        commands: list Command => "Commands",
        next_token: scalar String => "NextToken",
    }
}

impl_paged!(request ListCommandsRequest);
impl_paged!(result ListCommandsResult);

dto! {
    pub struct ListCommandInvocationsRequest {
        command_id: scalar String => "CommandId",
        instance_id: scalar String => "InstanceId",
        filters: list CommandFilter => "Filters",
        details: scalar bool => "Details",
        max_results: scalar i64 => "MaxResults",
        next_token: scalar String => "NextToken",
    }
}

dto! {
    pub struct ListCommandInvocationsResult {
        command_invocations: list CommandInvocation => "CommandInvocations",
        next_token: scalar String => "NextToken",
    }
}

impl_paged!(request ListCommandInvocationsRequest);
impl_paged!(result ListCommandInvocationsResult);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;

    #[test]
    fn command_status_round_trips_every_member() {
        for status in &[
            CommandStatus::Pending,
            CommandStatus::InProgress,
            CommandStatus::Success,
            CommandStatus::Cancelled,
            CommandStatus::Failed,
            CommandStatus::TimedOut,
            CommandStatus::Cancelling,
        ] {
            assert_eq!(CommandStatus::from_value(status.as_str()).unwrap(), *status);
        }
        assert!(CommandStatus::from_value("").is_err());
        assert!(CommandStatus::from_value("Done").is_err());
    }

    #[test]
    fn duplicate_parameter_key_is_rejected() {
        let mut request = SendCommandRequest::new()
            .with_document_name("AWS-RunShellScript".to_string());
        request
            .add_parameters_entry("commands", vec!["uptime".to_string()])
            .unwrap();
        let err = request
            .add_parameters_entry("commands", vec!["whoami".to_string()])
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateKey {
                field: "Parameters",
                key: "commands".to_string(),
            }
        );
        // first insertion survives
        assert_eq!(
            request.parameters().unwrap().get("commands"),
            Some(&vec!["uptime".to_string()])
        );
    }

    #[test]
    fn clear_entries_resets_the_map_to_absent() {
        let mut request = SendCommandRequest::new();
        request
            .add_parameters_entry("commands", vec!["uptime".to_string()])
            .unwrap();
        assert!(request.parameters().is_some());
        request.clear_parameters_entries();
        assert_eq!(request.parameters(), None);
        // a cleared key can be added again
        request
            .add_parameters_entry("commands", vec!["whoami".to_string()])
            .unwrap();
        assert_eq!(request.parameters().unwrap().len(), 1);
    }

    #[test]
    fn map_fields_serialize_under_their_wire_name() {
        let mut request = SendCommandRequest::new()
            .with_document_name("AWS-RunShellScript".to_string())
            .with_instance_ids("i-0123".to_string());
        request
            .add_parameters_entry("commands", vec!["uptime".to_string()])
            .unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "InstanceIds": ["i-0123"],
                "DocumentName": "AWS-RunShellScript",
                "Parameters": { "commands": ["uptime"] }
            })
        );
    }

    #[test]
    fn notification_config_renders_nested() {
        let config = NotificationConfig::new()
            .with_notification_arn("arn:aws:sns:sa-east-1:123:ops".to_string())
            .with_notification_events(NotificationEvent::Failed)
            .with_notification_type(NotificationType::Command);
        assert_eq!(
            format!("{:?}", config),
            "{NotificationArn: arn:aws:sns:sa-east-1:123:ops,NotificationEvents: [Failed],NotificationType: Command}"
        );
    }

    #[test]
    fn list_commands_pages_through_the_token() {
        use crate::pagination::{PagedRequest, PagedResult};

        let mut request = ListCommandsRequest::new().with_instance_id("i-0123".to_string());
        request.set_continuation(Some("abc".to_string()));
        assert_eq!(request.next_token(), Some(&"abc".to_string()));

        let mut result = ListCommandsResult::new();
        assert_eq!(result.continuation(), None);
        result.set_next_token("def".to_string());
        assert_eq!(result.continuation(), Some("def"));
    }
}
