//! Parameter Store records: get by name, get by path (paginated) and put.

wire_enum! {
    pub enum ParameterType {
        String => "String",
        StringList => "StringList",
        SecureString => "SecureString",
    }
}

wire_enum! {
    pub enum ParameterTier {
        Standard => "Standard",
        Advanced => "Advanced",
        IntelligentTiering => "Intelligent-Tiering",
    }
}

dto! {
    /// One parameter as returned by the service, value included.
    pub struct Parameter {
        name: scalar String => "Name",
        parameter_type: scalar ParameterType => "Type",
        value: scalar String => "Value",
        version: scalar i64 => "Version",
        last_modified_date: scalar String => "LastModifiedDate",
        arn: scalar String => "ARN",
    }
}

dto! {
    /// Parameter description without its value, as listed by describe calls.
    pub struct ParameterMetadata {
        name: scalar String => "Name",
        parameter_type: scalar ParameterType => "Type",
        key_id: scalar String => "KeyId",
        last_modified_user: scalar String => "LastModifiedUser",
        description: scalar String => "Description",
        version: scalar i64 => "Version",
        tier: scalar ParameterTier => "Tier",
    }
}

dto! {
    /// Name-based filter for path and describe queries.
    pub struct ParameterStringFilter {
        key: scalar String => "Key",
        option: scalar String => "Option",
        values: list String => "Values",
    }
}

dto! {
    pub struct GetParametersRequest {
        names: list String => "Names",
        with_decryption: scalar bool => "WithDecryption",
    }
}

dto! {
    /// Valid and invalid names come back side by side; an unknown name is
    /// reported here, not raised as a service error.
    pub struct GetParametersResult {
        parameters: list Parameter => "Parameters",
        invalid_parameters: list String => "InvalidParameters",
    }
}

dto! {
    pub struct GetParametersByPathRequest {
        path: scalar String => "Path",
        recursive: scalar bool => "Recursive",
        parameter_filters: list ParameterStringFilter => "ParameterFilters",
        with_decryption: scalar bool => "WithDecryption",
        max_results: scalar i64 => "MaxResults",
        next_token: scalar String => "NextToken",
    }
}

dto! {
    pub struct GetParametersByPathResult {
        parameters: list Parameter => "Parameters",
        next_token: scalar String => "NextToken",
    }
}

impl_paged!(request GetParametersByPathRequest);
impl_paged!(result GetParametersByPathResult);

dto! {
    pub struct PutParameterRequest {
        name: scalar String => "Name",
        description: scalar String => "Description",
        value: scalar String => "Value",
        parameter_type: scalar ParameterType => "Type",
        key_id: scalar String => "KeyId",
        overwrite: scalar bool => "Overwrite",
        allowed_pattern: scalar String => "AllowedPattern",
        tier: scalar ParameterTier => "Tier",
        tags: list super::common::Tag => "Tags",
    }
}

dto! {
    pub struct PutParameterResult {
        version: scalar i64 => "Version",
    }
}
