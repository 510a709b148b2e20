//! Error types surfaced by the model layer.
//!
//! Two families live here. `ModelError` covers input-shape failures raised
//! locally and synchronously (bad enum tokens, duplicate map keys).
//! `ServiceError` covers server-defined failures: the transport decodes the
//! server's error-type discriminator, selects the matching variant through
//! `ServiceError::from_code` and passes it to the caller unchanged. Transport
//! failures (timeouts, connectivity, signing) belong to the transport crate
//! and have no representation here.

/// Local input-shape errors. Never coerced or defaulted away.
#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum ModelError {
    #[fail(display = "unrecognized value '{}' for {}", value, enum_name)]
    InvalidEnumValue {
        enum_name: &'static str,
        value: String,
    },
    #[fail(display = "duplicate key '{}' for map field {}", key, field)]
    DuplicateKey { field: &'static str, key: String },
}

service_error! {
    /// The server hit an internal fault while processing the request.
    pub struct InternalServerError
}

service_error! {
    /// The KMS key id supplied for a secure-string parameter is not valid.
    pub struct InvalidKeyId
}

service_error! {
    /// The named parameter does not exist.
    pub struct ParameterNotFound { parameter_name }
}

service_error! {
    /// A parameter with the same name already exists and overwrite was not
    /// requested.
    pub struct ParameterAlreadyExists { parameter_name }
}

service_error! {
    /// The account hit its parameter count quota.
    pub struct ParameterLimitExceeded
}

service_error! {
    /// A concurrent update raced this one; the caller may resubmit.
    pub struct TooManyUpdates
}

service_error! {
    /// The continuation token is malformed or expired.
    pub struct InvalidNextToken
}

service_error! {
    /// The referenced document does not exist or is malformed.
    pub struct InvalidDocument { document_name }
}

service_error! {
    /// The same instance id was supplied more than once.
    pub struct DuplicateInstanceId { instance_id }
}

service_error! {
    /// No automation execution matches the supplied id.
    pub struct AutomationExecutionNotFound { execution_id }
}

service_error! {
    /// The referenced resource (baseline, window, association) does not
    /// exist.
    pub struct DoesNotExist
}

service_error! {
    /// The resource being created already exists.
    pub struct AlreadyExists
}

service_error! {
    /// An inventory item exceeded the per-item size limit.
    pub struct ItemSizeLimitExceeded { type_name }
}

/// A server-defined failure, tagged by the error-type discriminator the
/// service returned. The message is always present; diagnostic fields are
/// filled in by the transport after construction where the service supplies
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum ServiceError {
    #[fail(display = "{}", _0)]
    InternalServerError(InternalServerError),
    #[fail(display = "{}", _0)]
    InvalidKeyId(InvalidKeyId),
    #[fail(display = "{}", _0)]
    ParameterNotFound(ParameterNotFound),
    #[fail(display = "{}", _0)]
    ParameterAlreadyExists(ParameterAlreadyExists),
    #[fail(display = "{}", _0)]
    ParameterLimitExceeded(ParameterLimitExceeded),
    #[fail(display = "{}", _0)]
    TooManyUpdates(TooManyUpdates),
    #[fail(display = "{}", _0)]
    InvalidNextToken(InvalidNextToken),
    #[fail(display = "{}", _0)]
    InvalidDocument(InvalidDocument),
    #[fail(display = "{}", _0)]
    DuplicateInstanceId(DuplicateInstanceId),
    #[fail(display = "{}", _0)]
    AutomationExecutionNotFound(AutomationExecutionNotFound),
    #[fail(display = "{}", _0)]
    DoesNotExist(DoesNotExist),
    #[fail(display = "{}", _0)]
    AlreadyExists(AlreadyExists),
    #[fail(display = "{}", _0)]
    ItemSizeLimitExceeded(ItemSizeLimitExceeded),
    /// Discriminator the model does not know. Kept verbatim so nothing is
    /// swallowed.
    #[fail(display = "{} ({})", message, code)]
    Unrecognized { code: String, message: String },
}

impl ServiceError {
    /// Selects the variant matching a server discriminator string. Unknown
    /// codes land in `Unrecognized` with the code preserved.
    pub fn from_code(code: &str, message: &str) -> ServiceError {
        match code {
            "InternalServerError" => {
                ServiceError::InternalServerError(InternalServerError::new(message))
            }
            "InvalidKeyId" => ServiceError::InvalidKeyId(InvalidKeyId::new(message)),
            "ParameterNotFound" => {
                ServiceError::ParameterNotFound(ParameterNotFound::new(message))
            }
            "ParameterAlreadyExists" => {
                ServiceError::ParameterAlreadyExists(ParameterAlreadyExists::new(message))
            }
            "ParameterLimitExceeded" => {
                ServiceError::ParameterLimitExceeded(ParameterLimitExceeded::new(message))
            }
            "TooManyUpdates" => ServiceError::TooManyUpdates(TooManyUpdates::new(message)),
            "InvalidNextToken" => ServiceError::InvalidNextToken(InvalidNextToken::new(message)),
            "InvalidDocument" => ServiceError::InvalidDocument(InvalidDocument::new(message)),
            "DuplicateInstanceId" => {
                ServiceError::DuplicateInstanceId(DuplicateInstanceId::new(message))
            }
            "AutomationExecutionNotFoundException" => {
                ServiceError::AutomationExecutionNotFound(AutomationExecutionNotFound::new(message))
            }
            "DoesNotExistException" => ServiceError::DoesNotExist(DoesNotExist::new(message)),
            "AlreadyExistsException" => ServiceError::AlreadyExists(AlreadyExists::new(message)),
            "ItemSizeLimitExceededException" => {
                ServiceError::ItemSizeLimitExceeded(ItemSizeLimitExceeded::new(message))
            }
            _ => ServiceError::Unrecognized {
                code: code.to_string(),
                message: message.to_string(),
            },
        }
    }

    /// The human-readable message the server attached.
    pub fn message(&self) -> &str {
        match self {
            ServiceError::InternalServerError(e) => e.message(),
            ServiceError::InvalidKeyId(e) => e.message(),
            ServiceError::ParameterNotFound(e) => e.message(),
            ServiceError::ParameterAlreadyExists(e) => e.message(),
            ServiceError::ParameterLimitExceeded(e) => e.message(),
            ServiceError::TooManyUpdates(e) => e.message(),
            ServiceError::InvalidNextToken(e) => e.message(),
            ServiceError::InvalidDocument(e) => e.message(),
            ServiceError::DuplicateInstanceId(e) => e.message(),
            ServiceError::AutomationExecutionNotFound(e) => e.message(),
            ServiceError::DoesNotExist(e) => e.message(),
            ServiceError::AlreadyExists(e) => e.message(),
            ServiceError::ItemSizeLimitExceeded(e) => e.message(),
            ServiceError::Unrecognized { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_selects_the_tagged_variant() {
        let err = ServiceError::from_code("ParameterNotFound", "no such parameter");
        match err {
            ServiceError::ParameterNotFound(inner) => {
                assert_eq!(inner.message(), "no such parameter");
                assert_eq!(inner.parameter_name(), None);
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn unknown_code_is_preserved_verbatim() {
        let err = ServiceError::from_code("SubTypeCountLimitExceeded", "too many subtypes");
        assert_eq!(
            err,
            ServiceError::Unrecognized {
                code: "SubTypeCountLimitExceeded".to_string(),
                message: "too many subtypes".to_string(),
            }
        );
        assert_eq!(err.message(), "too many subtypes");
    }

    #[test]
    fn diagnostic_fields_are_two_phase() {
        let mut err = ParameterNotFound::new("no such parameter");
        assert_eq!(err.parameter_name(), None);
        err.set_parameter_name("/prod/db/password".to_string());
        assert_eq!(err.parameter_name(), Some("/prod/db/password"));
        err.set_parameter_name(None);
        assert_eq!(err.parameter_name(), None);
    }

    #[test]
    fn display_is_the_message() {
        let err = ServiceError::from_code("TooManyUpdates", "rate exceeded");
        assert_eq!(format!("{}", err), "rate exceeded");
    }

    #[test]
    fn duplicate_key_display_names_the_field() {
        let err = ModelError::DuplicateKey {
            field: "Parameters",
            key: "commands".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "duplicate key 'commands' for map field Parameters"
        );
    }
}
