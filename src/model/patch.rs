//! Patch Manager records: baselines, filters and approval rules.

use super::common::Tag;

wire_enum! {
    pub enum OperatingSystem {
        Windows => "WINDOWS",
        AmazonLinux => "AMAZON_LINUX",
        AmazonLinux2 => "AMAZON_LINUX_2",
        Ubuntu => "UBUNTU",
        RedhatEnterpriseLinux => "REDHAT_ENTERPRISE_LINUX",
        Suse => "SUSE",
        Centos => "CENTOS",
        Debian => "DEBIAN",
    }
}

wire_enum! {
    pub enum PatchComplianceLevel {
        Critical => "CRITICAL",
        High => "HIGH",
        Medium => "MEDIUM",
        Low => "LOW",
        Informational => "INFORMATIONAL",
        Unspecified => "UNSPECIFIED",
    }
}

wire_enum! {
    pub enum PatchFilterKey {
        Product => "PRODUCT",
        Classification => "CLASSIFICATION",
        MsrcSeverity => "MSRC_SEVERITY",
        PatchId => "PATCH_ID",
        Section => "SECTION",
        Priority => "PRIORITY",
        Severity => "SEVERITY",
    }
}

dto! {
    /// One patch selection criterion.
    pub struct PatchFilter {
        key: scalar PatchFilterKey => "Key",
        values: list String => "Values",
    }
}

dto! {
    /// A conjunction of patch filters.
    pub struct PatchFilterGroup {
        patch_filters: list PatchFilter => "PatchFilters",
    }
}

dto! {
    /// Auto-approval rule: patches matching the filter group are approved
    /// after a delay, at a compliance level.
    pub struct PatchRule {
        patch_filter_group: scalar PatchFilterGroup => "PatchFilterGroup",
        compliance_level: scalar PatchComplianceLevel => "ComplianceLevel",
        approve_after_days: scalar i64 => "ApproveAfterDays",
        enable_non_security: scalar bool => "EnableNonSecurity",
    }
}

dto! {
    pub struct PatchRuleGroup {
        patch_rules: list PatchRule => "PatchRules",
    }
}

dto! {
    pub struct PatchBaselineIdentity {
        baseline_id: scalar String => "BaselineId",
        baseline_name: scalar String => "BaselineName",
        operating_system: scalar OperatingSystem => "OperatingSystem",
        baseline_description: scalar String => "BaselineDescription",
        default_baseline: scalar bool => "DefaultBaseline",
    }
}

dto! {
    pub struct CreatePatchBaselineRequest {
        operating_system: scalar OperatingSystem => "OperatingSystem",
        name: scalar String => "Name",
        global_filters: scalar PatchFilterGroup => "GlobalFilters",
        approval_rules: scalar PatchRuleGroup => "ApprovalRules",
        approved_patches: list String => "ApprovedPatches",
        approved_patches_compliance_level: scalar PatchComplianceLevel => "ApprovedPatchesComplianceLevel",
        rejected_patches: list String => "RejectedPatches",
        description: scalar String => "Description",
        client_token: scalar String => "ClientToken",
        tags: list Tag => "Tags",
    }
}

dto! {
    pub struct CreatePatchBaselineResult {
        baseline_id: scalar String => "BaselineId",
    }
}

dto! {
    /// Generic key/values filter used by the describe calls.
    pub struct PatchOrchestratorFilter {
        key: scalar String => "Key",
        values: list String => "Values",
    }
}

dto! {
    pub struct DescribePatchBaselinesRequest {
        filters: list PatchOrchestratorFilter => "Filters",
        max_results: scalar i64 => "MaxResults",
        next_token: scalar String => "NextToken",
    }
}

dto! {
    pub struct DescribePatchBaselinesResult {
        baseline_identities: list PatchBaselineIdentity => "BaselineIdentities",
        next_token: scalar String => "NextToken",
    }
}

impl_paged!(request DescribePatchBaselinesRequest);
impl_paged!(result DescribePatchBaselinesResult);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operating_system_tokens_are_screaming_snake() {
        assert_eq!(OperatingSystem::AmazonLinux2.as_str(), "AMAZON_LINUX_2");
        assert_eq!(
            OperatingSystem::from_value("REDHAT_ENTERPRISE_LINUX").unwrap(),
            OperatingSystem::RedhatEnterpriseLinux
        );
        assert!(OperatingSystem::from_value("redhat").is_err());
        assert!(OperatingSystem::from_value("").is_err());
    }

    #[test]
    fn empty_filter_group_renders_as_empty_braces() {
        let group = PatchFilterGroup::new();
        assert_eq!(format!("{:?}", group), "{}");
    }

    #[test]
    fn populated_filter_group_renders_nested_records() {
        let group = PatchFilterGroup::new().with_patch_filters(
            PatchFilter::new()
                .with_key(PatchFilterKey::Product)
                .with_values("Ubuntu20.04".to_string()),
        );
        assert_eq!(
            format!("{:?}", group),
            "{PatchFilters: [{Key: PRODUCT,Values: [Ubuntu20.04]}]}"
        );
    }

    #[test]
    fn approval_rule_nests_filter_group_by_value() {
        let rule = PatchRule::new()
            .with_patch_filter_group(
                PatchFilterGroup::new().with_patch_filters(
                    PatchFilter::new()
                        .with_key(PatchFilterKey::Classification)
                        .with_values("Security".to_string()),
                ),
            )
            .with_compliance_level(PatchComplianceLevel::Critical)
            .with_approve_after_days(7);

        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "PatchFilterGroup": {
                    "PatchFilters": [{ "Key": "CLASSIFICATION", "Values": ["Security"] }]
                },
                "ComplianceLevel": "CRITICAL",
                "ApproveAfterDays": 7
            })
        );
    }

    #[test]
    fn baseline_request_equality_is_field_wise() {
        let build = || {
            CreatePatchBaselineRequest::new()
                .with_name("prod-ubuntu".to_string())
                .with_operating_system(OperatingSystem::Ubuntu)
                .with_approved_patches("kernel-5.4".to_string())
        };
        assert_eq!(build(), build());
        assert_ne!(
            build(),
            build().with_approved_patches("openssl-1.1".to_string())
        );
    }
}
