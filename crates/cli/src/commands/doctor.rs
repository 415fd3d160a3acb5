use std::net::ToSocketAddrs;

use clientele_core::config::{AppConfig, LoadOptions};
use clientele_store::fixtures;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&report)
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            checks.push(check_seed_readiness(&config));
            checks.push(check_bind_address(&config));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(DoctorCheck {
                name: "seed_readiness",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
            checks.push(DoctorCheck {
                name: "bind_address",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_seed_readiness(config: &AppConfig) -> DoctorCheck {
    match fixtures::load_from_path(&config.seed.path) {
        Ok(records) => DoctorCheck {
            name: "seed_readiness",
            status: CheckStatus::Pass,
            details: format!(
                "{} customer records in `{}`",
                records.len(),
                config.seed.path.display()
            ),
        },
        Err(error) => DoctorCheck {
            name: "seed_readiness",
            status: CheckStatus::Fail,
            details: error.to_string(),
        },
    }
}

fn check_bind_address(config: &AppConfig) -> DoctorCheck {
    let target = (config.server.bind_address.as_str(), config.server.port);
    match target.to_socket_addrs().map(|mut addresses| addresses.next()) {
        Ok(Some(_)) => DoctorCheck {
            name: "bind_address",
            status: CheckStatus::Pass,
            details: format!(
                "`{}:{}` resolves to a bindable address",
                config.server.bind_address, config.server.port
            ),
        },
        Ok(None) => DoctorCheck {
            name: "bind_address",
            status: CheckStatus::Fail,
            details: format!(
                "`{}:{}` resolved to no addresses",
                config.server.bind_address, config.server.port
            ),
        },
        Err(error) => DoctorCheck {
            name: "bind_address",
            status: CheckStatus::Fail,
            details: format!("failed to resolve bind address: {error}"),
        },
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = vec![report.summary.clone()];
    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "FAIL",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("  [{marker:>4}] {:<18} {}", check.name, check.details));
    }
    lines.join("\n")
}

fn escape_json(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}
