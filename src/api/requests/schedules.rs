//
//  tableau-rest
//  api/requests/schedules.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Schedule bodies.
//!
//! ```json
//! {"schedule": {
//!     "name": "nightly", "priority": 50, "type": "Extract",
//!     "frequency": "Weekly", "executionOrder": "Parallel",
//!     "frequencyDetails": {
//!         "start": "07:00:00",
//!         "intervals": {"interval": [{"weekDay": "Monday"}]}
//!     }
//! }}
//! ```

use chrono::NaiveTime;
use serde_json::Value;

use super::{id_ref, parse_opt, required, Fields};
use crate::api::common::{ApiError, Result};

closed_set! {
    /// How often a schedule fires.
    pub enum Frequency ("schedule frequency") {
        Hourly => "Hourly",
        Daily => "Daily",
        Weekly => "Weekly",
        Monthly => "Monthly",
    }
}

closed_set! {
    /// What a schedule runs.
    pub enum ScheduleType ("schedule type") {
        Extract => "Extract",
        Subscription => "Subscription",
        Flow => "Flow",
    }
}

closed_set! {
    pub enum ExecutionOrder ("execution order") {
        Parallel => "Parallel",
        Serial => "Serial",
    }
}

closed_set! {
    pub enum ScheduleState ("schedule state") {
        Active => "Active",
        Suspended => "Suspended",
    }
}

closed_set! {
    pub enum WeekDay ("week day") {
        Monday => "Monday",
        Tuesday => "Tuesday",
        Wednesday => "Wednesday",
        Thursday => "Thursday",
        Friday => "Friday",
        Saturday => "Saturday",
        Sunday => "Sunday",
    }
}

const MINUTE_INTERVALS: [u32; 3] = [15, 30, 60];
const HOUR_INTERVALS: [u32; 7] = [1, 2, 4, 6, 8, 12, 24];

/// One entry of `frequencyDetails.intervals.interval`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interval {
    /// 15, 30 or 60.
    Minutes(u32),
    /// 1, 2, 4, 6, 8, 12 or 24.
    Hours(u32),
    /// `Monday` .. `Sunday`.
    WeekDay(String),
    /// `1` .. `31` or `LastDay`.
    MonthDay(String),
}

impl Interval {
    /// Builds an interval from a `key: value` pair.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidParameter`] when `key` is not one of `minutes`,
    /// `hours`, `weekDay` or `monthDay`, or a numeric value does not parse.
    pub fn from_pair(key: &str, value: &str) -> Result<Self> {
        let number = || {
            value
                .trim()
                .parse::<u32>()
                .map_err(|_| ApiError::invalid(format!("interval {} must be a number, got '{}'", key, value)))
        };
        match key {
            "minutes" => Ok(Self::Minutes(number()?)),
            "hours" => Ok(Self::Hours(number()?)),
            "weekDay" => Ok(Self::WeekDay(value.to_string())),
            "monthDay" => Ok(Self::MonthDay(value.to_string())),
            other => Err(ApiError::invalid(format!(
                "invalid interval key '{}'; expected one of: minutes, hours, weekDay, monthDay",
                other
            ))),
        }
    }

    fn to_value(&self) -> Result<Value> {
        let (key, value) = match self {
            Self::Minutes(minutes) => {
                if !MINUTE_INTERVALS.contains(minutes) {
                    return Err(ApiError::invalid(format!(
                        "minutes interval must be 15, 30 or 60, got {}",
                        minutes
                    )));
                }
                ("minutes", minutes.to_string())
            }
            Self::Hours(hours) => {
                if !HOUR_INTERVALS.contains(hours) {
                    return Err(ApiError::invalid(format!(
                        "hours interval must be one of 1, 2, 4, 6, 8, 12, 24, got {}",
                        hours
                    )));
                }
                ("hours", hours.to_string())
            }
            Self::WeekDay(day) => ("weekDay", day.parse::<WeekDay>()?.to_string()),
            Self::MonthDay(day) => ("monthDay", month_day(day)?),
        };
        Ok(Fields::new().put(key, value).into_value())
    }
}

fn month_day(day: &str) -> Result<String> {
    let trimmed = day.trim();
    if trimmed.eq_ignore_ascii_case("LastDay") {
        return Ok("LastDay".to_string());
    }
    match trimmed.parse::<u32>() {
        Ok(n) if (1..=31).contains(&n) => Ok(n.to_string()),
        _ => Err(ApiError::invalid(format!(
            "monthDay must be 1-31 or LastDay, got '{}'",
            day
        ))),
    }
}

fn time_of_day(value: &str, name: &str) -> Result<String> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M:%S")
        .map(|t| t.format("%H:%M:%S").to_string())
        .map_err(|_| ApiError::invalid(format!("{} must be HH:MM:SS, got '{}'", name, value)))
}

fn priority(value: u32) -> Result<u32> {
    if !(1..=100).contains(&value) {
        return Err(ApiError::invalid(format!(
            "priority must be between 1 and 100, got {}",
            value
        )));
    }
    Ok(value)
}

fn frequency_details(
    frequency: Option<Frequency>,
    start: Option<&str>,
    end: Option<&str>,
    intervals: Option<&[Interval]>,
) -> Result<Fields> {
    let mut details = Fields::new();
    if let Some(start) = start {
        details = details.put("start", time_of_day(start, "start time")?);
    }
    if let (Some(Frequency::Hourly), Some(end)) = (frequency, end) {
        details = details.put("end", time_of_day(end, "end time")?);
    }
    if let Some(intervals) = intervals.filter(|i| !i.is_empty()) {
        let entries = intervals
            .iter()
            .map(Interval::to_value)
            .collect::<Result<Vec<_>>>()?;
        details = details.put_fields("intervals", Fields::new().put("interval", entries));
    }
    Ok(details)
}

/// Options for creating a schedule.
#[derive(Debug, Clone, Default)]
pub struct CreateScheduleRequest {
    pub name: String,
    /// 1 (highest) to 100.
    pub priority: u32,
    /// `Extract`, `Subscription` or `Flow`.
    pub schedule_type: String,
    /// `Parallel` or `Serial`.
    pub execution_order: String,
    /// `Hourly`, `Daily`, `Weekly` or `Monthly`.
    pub frequency: String,
    /// `HH:MM:SS`.
    pub start_time: String,
    /// `HH:MM:SS`; only sent for hourly schedules.
    pub end_time: Option<String>,
    pub intervals: Vec<Interval>,
}

impl CreateScheduleRequest {
    pub fn build(&self) -> Result<Value> {
        let name = required(&self.name, "schedule name")?;
        let schedule_type: ScheduleType = self.schedule_type.parse()?;
        let execution_order: ExecutionOrder = self.execution_order.parse()?;
        let frequency: Frequency = self.frequency.parse()?;
        required(&self.start_time, "start time")?;

        let details = frequency_details(
            Some(frequency),
            Some(&self.start_time),
            self.end_time.as_deref(),
            Some(&self.intervals),
        )?;

        Ok(Fields::new()
            .put("name", name)
            .put("priority", priority(self.priority)?)
            .put("type", schedule_type.as_str())
            .put("frequency", frequency.as_str())
            .put("executionOrder", execution_order.as_str())
            .put_fields("frequencyDetails", details)
            .wrap("schedule"))
    }
}

/// Options for updating a schedule; every field is optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateScheduleRequest {
    pub name: Option<String>,
    pub priority: Option<u32>,
    pub execution_order: Option<String>,
    pub frequency: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub intervals: Option<Vec<Interval>>,
    /// `Active` or `Suspended`, any case.
    pub state: Option<String>,
}

impl UpdateScheduleRequest {
    pub fn build(&self) -> Result<Value> {
        let execution_order: Option<ExecutionOrder> = parse_opt(self.execution_order.as_deref())?;
        let frequency: Option<Frequency> = parse_opt(self.frequency.as_deref())?;
        let state: Option<ScheduleState> = parse_opt(self.state.as_deref())?;
        let priority = self.priority.map(priority).transpose()?;

        let details = frequency_details(
            frequency,
            self.start_time.as_deref(),
            self.end_time.as_deref(),
            self.intervals.as_deref(),
        )?;

        Ok(Fields::new()
            .put_opt("name", self.name.as_deref())
            .put_opt("priority", priority)
            .put_opt("executionOrder", execution_order.map(|o| o.as_str()))
            .put_opt("frequency", frequency.map(|f| f.as_str()))
            .put_opt("state", state.map(|s| s.as_str()))
            .put_fields("frequencyDetails", details)
            .wrap("schedule"))
    }
}

/// Content bound to a schedule as a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduledContent<'a> {
    Workbook(&'a str),
    Datasource(&'a str),
    Flow(&'a str),
}

impl ScheduledContent<'_> {
    /// `{"task": {"extractRefresh": {"workbook": {"id": ...}}}}` or the
    /// `flowRun` form for flows.
    pub fn task_body(&self) -> Result<Value> {
        let (task, key, id) = match self {
            Self::Workbook(id) => ("extractRefresh", "workbook", *id),
            Self::Datasource(id) => ("extractRefresh", "datasource", *id),
            Self::Flow(id) => ("flowRun", "flow", *id),
        };
        let id = required(id, &format!("{} id", key))?;
        Ok(Fields::new()
            .put(task, Fields::new().put(key, id_ref(id)).into_value())
            .wrap("task"))
    }
}
