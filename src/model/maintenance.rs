//! Maintenance window records: create and describe windows, execution rows.

wire_enum! {
    pub enum MaintenanceWindowExecutionStatus {
        Pending => "PENDING",
        InProgress => "IN_PROGRESS",
        Success => "SUCCESS",
        Failed => "FAILED",
        TimedOut => "TIMED_OUT",
        Cancelling => "CANCELLING",
        Cancelled => "CANCELLED",
        SkippedOverlapping => "SKIPPED_OVERLAPPING",
    }
}

dto! {
    pub struct MaintenanceWindowIdentity {
        window_id: scalar String => "WindowId",
        name: scalar String => "Name",
        description: scalar String => "Description",
        enabled: scalar bool => "Enabled",
        duration: scalar i64 => "Duration",
        cutoff: scalar i64 => "Cutoff",
        schedule: scalar String => "Schedule",
        next_execution_time: scalar String => "NextExecutionTime",
    }
}

dto! {
    pub struct MaintenanceWindowExecution {
        window_id: scalar String => "WindowId",
        window_execution_id: scalar String => "WindowExecutionId",
        status: scalar MaintenanceWindowExecutionStatus => "Status",
        status_details: scalar String => "StatusDetails",
        start_time: scalar String => "StartTime",
        end_time: scalar String => "EndTime",
    }
}

dto! {
    pub struct CreateMaintenanceWindowRequest {
        name: scalar String => "Name",
        description: scalar String => "Description",
        start_date: scalar String => "StartDate",
        end_date: scalar String => "EndDate",
        schedule: scalar String => "Schedule",
        schedule_timezone: scalar String => "ScheduleTimezone",
        duration: scalar i64 => "Duration",
        cutoff: scalar i64 => "Cutoff",
        allow_unassociated_targets: scalar bool => "AllowUnassociatedTargets",
        client_token: scalar String => "ClientToken",
    }
}

dto! {
    pub struct CreateMaintenanceWindowResult {
        window_id: scalar String => "WindowId",
    }
}

dto! {
    pub struct MaintenanceWindowFilter {
        key: scalar String => "Key",
        values: list String => "Values",
    }
}

dto! {
    pub struct DescribeMaintenanceWindowsRequest {
        filters: list MaintenanceWindowFilter => "Filters",
        max_results: scalar i64 => "MaxResults",
        next_token: scalar String => "NextToken",
    }
}

dto! {
    pub struct DescribeMaintenanceWindowsResult {
        window_identities: list MaintenanceWindowIdentity => "WindowIdentities",
        next_token: scalar String => "NextToken",
    }
}

impl_paged!(request DescribeMaintenanceWindowsRequest);
impl_paged!(result DescribeMaintenanceWindowsResult);
