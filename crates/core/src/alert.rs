//! Fault predicates and the alert text sent for each one.

use std::fmt;

use crate::status_report::StatusReport;

/// Subject line shared by every alert email.
pub const ALERT_SUBJECT: &str = "🚨 Cold store alarm";

/// A fault that warrants an alert.
///
/// Variants are declared in evaluation order; [`FaultCondition::ALL`] and
/// [`FaultCondition::detect`] preserve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultCondition {
    /// The controller stopped answering (`deviceResponsive == false`).
    DeviceUnresponsive,
    /// The temperature alarm is raised (`temperatureAlarmStatus == true`).
    TemperatureAlarm,
    /// The open-door alarm is raised (`openDoorAlarmStatus == true`).
    OpenDoorAlarm,
}

impl FaultCondition {
    pub const ALL: [FaultCondition; 3] = [
        FaultCondition::DeviceUnresponsive,
        FaultCondition::TemperatureAlarm,
        FaultCondition::OpenDoorAlarm,
    ];

    /// Name of the reported property this condition inspects.
    pub fn property(self) -> &'static str {
        match self {
            FaultCondition::DeviceUnresponsive => "deviceResponsive",
            FaultCondition::TemperatureAlarm => "temperatureAlarmStatus",
            FaultCondition::OpenDoorAlarm => "openDoorAlarmStatus",
        }
    }

    /// Flag value of [`property`](Self::property) that means "fault".
    pub fn triggering_value(self) -> bool {
        !matches!(self, FaultCondition::DeviceUnresponsive)
    }

    /// Whether this condition holds for `report`.
    ///
    /// An absent or non-boolean property never triggers.
    pub fn evaluate(self, report: &StatusReport) -> bool {
        report.flag(self.property()) == Some(self.triggering_value())
    }

    /// All conditions that hold for `report`, in evaluation order.
    pub fn detect(report: &StatusReport) -> Vec<FaultCondition> {
        Self::ALL
            .into_iter()
            .filter(|condition| condition.evaluate(report))
            .collect()
    }

    pub fn message(self) -> AlertMessage {
        let body = match self {
            FaultCondition::DeviceUnresponsive => "⚠️ The cold store controller is not responding.",
            FaultCondition::TemperatureAlarm => "⚠️ The cold store temperature alarm was triggered!",
            FaultCondition::OpenDoorAlarm => "⚠️ The cold store open-door alarm was triggered!",
        };
        AlertMessage {
            subject: ALERT_SUBJECT,
            body,
        }
    }
}

impl fmt::Display for FaultCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FaultCondition::DeviceUnresponsive => "device_unresponsive",
            FaultCondition::TemperatureAlarm => "temperature_alarm",
            FaultCondition::OpenDoorAlarm => "open_door_alarm",
        };
        f.write_str(name)
    }
}

/// Subject and body of one alert email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertMessage {
    pub subject: &'static str,
    pub body: &'static str,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn report(pairs: &[(&str, serde_json::Value)]) -> StatusReport {
        StatusReport::from_pairs(pairs.iter().cloned())
    }

    #[test]
    fn unresponsive_triggers_on_false_only() {
        let c = FaultCondition::DeviceUnresponsive;
        assert!(c.evaluate(&report(&[("deviceResponsive", json!(false))])));
        assert!(!c.evaluate(&report(&[("deviceResponsive", json!(true))])));
        assert!(!c.evaluate(&report(&[])));
        assert!(!c.evaluate(&report(&[("deviceResponsive", json!(null))])));
    }

    #[test]
    fn alarms_trigger_on_true_only() {
        for c in [FaultCondition::TemperatureAlarm, FaultCondition::OpenDoorAlarm] {
            assert!(c.evaluate(&report(&[(c.property(), json!(true))])));
            assert!(!c.evaluate(&report(&[(c.property(), json!(false))])));
            assert!(!c.evaluate(&report(&[])));
        }
    }

    #[test]
    fn string_values_never_trigger() {
        let r = report(&[
            ("deviceResponsive", json!("false")),
            ("temperatureAlarmStatus", json!("true")),
            ("openDoorAlarmStatus", json!("true")),
        ]);
        assert!(FaultCondition::detect(&r).is_empty());
    }

    #[test]
    fn numeric_values_never_trigger() {
        let r = report(&[
            ("deviceResponsive", json!(0)),
            ("temperatureAlarmStatus", json!(1)),
        ]);
        assert!(FaultCondition::detect(&r).is_empty());
    }

    #[test]
    fn detect_preserves_evaluation_order() {
        let r = report(&[
            ("openDoorAlarmStatus", json!(true)),
            ("temperatureAlarmStatus", json!(true)),
            ("deviceResponsive", json!(false)),
        ]);
        assert_eq!(FaultCondition::detect(&r), FaultCondition::ALL.to_vec());
    }

    #[test]
    fn messages_share_subject() {
        for c in FaultCondition::ALL {
            assert_eq!(c.message().subject, ALERT_SUBJECT);
        }
        assert_eq!(
            FaultCondition::TemperatureAlarm.message().body,
            "⚠️ The cold store temperature alarm was triggered!"
        );
    }

    #[test]
    fn display_uses_snake_case_names() {
        assert_eq!(FaultCondition::DeviceUnresponsive.to_string(), "device_unresponsive");
        assert_eq!(FaultCondition::TemperatureAlarm.to_string(), "temperature_alarm");
        assert_eq!(FaultCondition::OpenDoorAlarm.to_string(), "open_door_alarm");
    }
}
