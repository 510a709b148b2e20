//! State Manager association records: create associations and describe
//! their execution targets.

use super::common::Target;

wire_enum! {
    pub enum AssociationStatusName {
        Pending => "Pending",
        Success => "Success",
        Failed => "Failed",
    }
}

wire_enum! {
    pub enum AssociationExecutionTargetsFilterKey {
        Status => "Status",
        ResourceId => "ResourceId",
        ResourceType => "ResourceType",
    }
}

dto! {
    pub struct AssociationStatus {
        date: scalar String => "Date",
        name: scalar AssociationStatusName => "Name",
        message: scalar String => "Message",
        additional_info: scalar String => "AdditionalInfo",
    }
}

dto! {
    pub struct Association {
        name: scalar String => "Name",
        instance_id: scalar String => "InstanceId",
        association_id: scalar String => "AssociationId",
        association_version: scalar String => "AssociationVersion",
        document_version: scalar String => "DocumentVersion",
        targets: list Target => "Targets",
        last_execution_date: scalar String => "LastExecutionDate",
        schedule_expression: scalar String => "ScheduleExpression",
        association_name: scalar String => "AssociationName",
    }
}

dto! {
    pub struct CreateAssociationRequest {
        name: scalar String => "Name",
        document_version: scalar String => "DocumentVersion",
        instance_id: scalar String => "InstanceId",
        parameters: map Vec<String> => "Parameters",
        targets: list Target => "Targets",
        schedule_expression: scalar String => "ScheduleExpression",
        association_name: scalar String => "AssociationName",
        max_errors: scalar String => "MaxErrors",
        max_concurrency: scalar String => "MaxConcurrency",
    }
}

dto! {
    pub struct AssociationDescription {
        name: scalar String => "Name",
        instance_id: scalar String => "InstanceId",
        association_version: scalar String => "AssociationVersion",
        date: scalar String => "Date",
        status: scalar AssociationStatus => "Status",
        document_version: scalar String => "DocumentVersion",
        parameters: map Vec<String> => "Parameters",
        association_id: scalar String => "AssociationId",
        targets: list Target => "Targets",
        schedule_expression: scalar String => "ScheduleExpression",
        association_name: scalar String => "AssociationName",
    }
}

dto! {
    pub struct CreateAssociationResult {
        association_description: scalar AssociationDescription => "AssociationDescription",
    }
}

dto! {
    pub struct AssociationExecutionTargetsFilter {
        key: scalar AssociationExecutionTargetsFilterKey => "Key",
        value: scalar String => "Value",
    }
}

dto! {
    pub struct AssociationExecutionTarget {
        association_id: scalar String => "AssociationId",
        association_version: scalar String => "AssociationVersion",
        execution_id: scalar String => "ExecutionId",
        resource_id: scalar String => "ResourceId",
        resource_type: scalar String => "ResourceType",
        status: scalar String => "Status",
        detailed_status: scalar String => "DetailedStatus",
        last_execution_date: scalar String => "LastExecutionDate",
    }
}

dto! {
    pub struct DescribeAssociationExecutionTargetsRequest {
        association_id: scalar String => "AssociationId",
        execution_id: scalar String => "ExecutionId",
        filters: list AssociationExecutionTargetsFilter => "Filters",
        max_results: scalar i64 => "MaxResults",
        next_token: scalar String => "NextToken",
    }
}

dto! {
    pub struct DescribeAssociationExecutionTargetsResult {
        association_execution_targets: list AssociationExecutionTarget => "AssociationExecutionTargets",
        next_token: scalar String => "NextToken",
    }
}

impl_paged!(request DescribeAssociationExecutionTargetsRequest);
impl_paged!(result DescribeAssociationExecutionTargetsResult);
