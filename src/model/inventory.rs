//! Inventory records: query and upload instance inventory.

wire_enum! {
    pub enum InventoryQueryOperatorType {
        Equal => "Equal",
        NotEqual => "NotEqual",
        BeginWith => "BeginWith",
        LessThan => "LessThan",
        GreaterThan => "GreaterThan",
        Exists => "Exists",
    }
}

dto! {
    pub struct InventoryFilter {
        key: scalar String => "Key",
        values: list String => "Values",
        filter_type: scalar InventoryQueryOperatorType => "Type",
    }
}

dto! {
    /// One inventory type captured for an instance. `Content` is a list of
    /// attribute maps; `Context` carries caller-supplied metadata.
    pub struct InventoryItem {
        type_name: scalar String => "TypeName",
        schema_version: scalar String => "SchemaVersion",
        capture_time: scalar String => "CaptureTime",
        content_hash: scalar String => "ContentHash",
        content: list ::std::collections::BTreeMap<String, String> => "Content",
        context: map String => "Context",
    }
}

dto! {
    pub struct InventoryResultItem {
        type_name: scalar String => "TypeName",
        schema_version: scalar String => "SchemaVersion",
        capture_time: scalar String => "CaptureTime",
        content_hash: scalar String => "ContentHash",
        content: list ::std::collections::BTreeMap<String, String> => "Content",
    }
}

dto! {
    pub struct InventoryResultEntity {
        id: scalar String => "Id",
        data: map InventoryResultItem => "Data",
    }
}

dto! {
    pub struct GetInventoryRequest {
        filters: list InventoryFilter => "Filters",
        result_attributes: list String => "ResultAttributes",
        max_results: scalar i64 => "MaxResults",
        next_token: scalar String => "NextToken",
    }
}

dto! {
    pub struct GetInventoryResult {
        entities: list InventoryResultEntity => "Entities",
        next_token: scalar String => "NextToken",
    }
}

impl_paged!(request GetInventoryRequest);
impl_paged!(result GetInventoryResult);

dto! {
    pub struct PutInventoryRequest {
        instance_id: scalar String => "InstanceId",
        items: list InventoryItem => "Items",
    }
}

dto! {
    pub struct PutInventoryResult {
        message: scalar String => "Message",
    }
}
