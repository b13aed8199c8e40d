//! `nimbus quota` command

use std::io::Write;

use color_eyre::Result;
use eyre::WrapErr;

use nimbus_api::Quota;
use nimbus_core::{Layout, OutputOptions, QuotaUsage, RecordError, RecordSet, render};

use super::Context;

/// One quota-limited resource: machine key stem, label, usage
struct QuotaLine {
    key: &'static str,
    label: &'static str,
    usage: QuotaUsage,
}

fn quota_lines(quota: &Quota) -> Vec<QuotaLine> {
    let line = |key: &'static str, label: &'static str, usage: u64, limit: u64| QuotaLine {
        key,
        label,
        usage: QuotaUsage::new(usage, limit),
    };

    vec![
        line("instance_count", "Instance Count", quota.instance_count_usage, quota.instance_count_limit),
        line("cpu_core", "CPUCore", quota.cpu_core_usage, quota.cpu_core_limit),
        line("ram_mb", "RAM Megabytes", quota.ram_mb_usage, quota.ram_mb_limit),
        line("disk_gb", "Disk Gigabytes", quota.disk_gb_usage, quota.disk_gb_limit),
        line("disk_volume_count", "Disk Volume Count", quota.disk_volume_count_usage, quota.disk_volume_count_limit),
        line("disk_snapshot_count", "Disk Snapshot Count", quota.disk_snapshot_count_usage, quota.disk_snapshot_count_limit),
        line("public_ip_address", "Public IP Address", quota.public_ip_address_usage, quota.public_ip_address_limit),
        line("subnet_count", "Subnet Count", quota.subnet_count_usage, quota.subnet_count_limit),
        line("network_count", "Network Count", quota.network_count_usage, quota.network_count_limit),
        line("security_group", "Security Group", quota.security_group_usage, quota.security_group_limit),
        line("security_group_rule", "Security Group Rule", quota.security_group_rule_usage, quota.security_group_rule_limit),
        line("loadbalancer_count", "LoadBalancer Count", quota.loadbalancer_count_usage, quota.loadbalancer_count_limit),
        line("objectstore_gb", "ObjectStore Gigabytes", quota.objectstore_gb_usage, quota.objectstore_gb_limit),
        line("database_count", "Database Count", quota.database_count_usage, quota.database_count_limit),
        line("database_cpu_core", "Database CPUCore", quota.database_cpu_core_usage, quota.database_cpu_core_limit),
        line("database_ram_mb", "Database RAM Megabytes", quota.database_ram_mb_usage, quota.database_ram_mb_limit),
        line("database_disk_gb", "Database Disk Gigabytes", quota.database_disk_gb_usage, quota.database_disk_gb_limit),
        line("database_snapshot_count", "Database Snapshot Count", quota.database_snapshot_count_usage, quota.database_snapshot_count_limit),
    ]
}

/// Show quota and usage
///
/// # Errors
/// Returns an error if the API call or rendering fails.
pub async fn run<W: Write>(ctx: &Context<'_>, out: &mut W) -> Result<()> {
    let quota = ctx.api.get_quota().await.wrap_err("fetching quota failed")?;

    let records = quota_records(&quota, ctx.output)?;
    render(&records, ctx.output, &Layout::key_values_array(), out)?;
    Ok(())
}

/// Raw limits and usage for machine-readable output, percentages otherwise
fn quota_records(quota: &Quota, output: &OutputOptions) -> Result<RecordSet, RecordError> {
    let mut records = RecordSet::new();
    let record = records.start_record();

    for line in quota_lines(quota) {
        if output.is_machine_readable() {
            record
                .append_field(
                    format!("{}_limit", line.key),
                    line.usage.limit.to_string(),
                    format!("{} Limit", line.label),
                )?
                .append_field(
                    format!("{}_usage", line.key),
                    line.usage.usage.to_string(),
                    format!("{} Usage", line.label),
                )?;
        } else {
            record.append_field(line.key, line.usage.to_string(), line.label)?;
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use nimbus_core::OutputFormat;

    use super::*;
    use crate::commands::mock::MockApi;

    fn api() -> MockApi {
        MockApi {
            quota: Quota {
                instance_count_limit: 10,
                instance_count_usage: 5,
                cpu_core_limit: 16,
                cpu_core_usage: 4,
                ..Quota::default()
            },
            ..MockApi::default()
        }
    }

    async fn rendered(output: OutputOptions) -> String {
        let api = api();
        let ctx = Context {
            api: &api,
            output: &output,
            region: None,
        };

        let mut out = Vec::new();
        run(&ctx, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_key_value_summary() {
        let text = rendered(OutputOptions::default()).await;
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], "Instance Count: 5/10 (50%)");
        assert_eq!(lines[1], "CPUCore: 4/16 (25%)");
        assert_eq!(lines[14], "Database CPUCore: 0 used");
        assert_eq!(lines[2], "RAM Megabytes: 0 used");
    }

    #[tokio::test]
    async fn test_json_is_array_of_raw_numbers() {
        let json = rendered(OutputOptions::new(OutputFormat::Json)).await;

        assert!(json.starts_with("[{\"instance_count_limit\":\"10\",\"instance_count_usage\":\"5\","));
        assert!(json.ends_with("}]\n"));
        assert_eq!(json.matches("_limit\"").count(), 18);
        assert_eq!(json.matches("_usage\"").count(), 18);
    }

    #[tokio::test]
    async fn test_custom_template() {
        let output = OutputOptions::new(OutputFormat::Custom)
            .with_template("{{instance_count_usage}}/{{instance_count_limit}}");
        assert_eq!(rendered(output).await, "5/10\n");
    }

    #[test]
    fn test_machine_keys_unique() {
        let output = OutputOptions::new(OutputFormat::Json);
        let records = quota_records(&Quota::default(), &output).unwrap();
        assert_eq!(records.records()[0].len(), 36);
    }
}
