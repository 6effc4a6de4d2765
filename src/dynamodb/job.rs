use anyhow::Result;
use aws_sdk_dynamodb::types::AttributeValue;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::dynamodb::Item;

/// Attribute names of a job record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobKey {
    BatchId,
    JobId,
    UserId,
    Priority,
    Status,
    /// Where the job was registered from.
    Source,
    EcsTaskId,
    ErrorStatus,
    StartTime,
    EndTime,
    /// Input parameters.
    Params,
    /// Location of the execution result.
    ResultPath,
    RetriesCount,
    /// DynamoDB time-to-live.
    Ttl,
}

impl JobKey {
    pub const ALL: [JobKey; 14] = [
        JobKey::BatchId,
        JobKey::JobId,
        JobKey::UserId,
        JobKey::Priority,
        JobKey::Status,
        JobKey::Source,
        JobKey::EcsTaskId,
        JobKey::ErrorStatus,
        JobKey::StartTime,
        JobKey::EndTime,
        JobKey::Params,
        JobKey::ResultPath,
        JobKey::RetriesCount,
        JobKey::Ttl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            JobKey::BatchId => "BatchId",
            JobKey::JobId => "JobId",
            JobKey::UserId => "UserId",
            JobKey::Priority => "Priority",
            JobKey::Status => "Status",
            JobKey::Source => "Source",
            JobKey::EcsTaskId => "EcsTaskId",
            JobKey::ErrorStatus => "ErrorStatus",
            JobKey::StartTime => "StartTime",
            JobKey::EndTime => "EndTime",
            JobKey::Params => "Params",
            JobKey::ResultPath => "ResultPath",
            JobKey::RetriesCount => "RetriesCount",
            JobKey::Ttl => "Ttl",
        }
    }

    /// All attribute names, in declaration order.
    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|key| key.as_str().to_string()).collect()
    }
}

impl fmt::Display for JobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generates a fresh partition key: a v4 UUID as 32 hex digits without hyphens.
pub fn new_batch_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// A job record as stored in the job table.
///
/// Every field is an opaque string; `batch_id` is the partition key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobRecord {
    pub batch_id: String,
    pub job_id: String,
    pub user_id: String,
    pub priority: String,
    pub status: String,
    pub source: String,
    pub ecs_task_id: String,
    pub error_status: String,
    pub start_time: String,
    pub end_time: String,
    pub params: String,
    pub result_path: String,
    pub retries_count: String,
    pub ttl: String,
}

impl JobRecord {
    /// The demonstration record: `batch_id` plus `"This is <Key>."` in every other field.
    pub fn sample(batch_id: impl Into<String>) -> Self {
        let placeholder = |key: JobKey| format!("This is {key}.");
        Self {
            batch_id: batch_id.into(),
            job_id: placeholder(JobKey::JobId),
            user_id: placeholder(JobKey::UserId),
            priority: placeholder(JobKey::Priority),
            status: placeholder(JobKey::Status),
            source: placeholder(JobKey::Source),
            ecs_task_id: placeholder(JobKey::EcsTaskId),
            error_status: placeholder(JobKey::ErrorStatus),
            start_time: placeholder(JobKey::StartTime),
            end_time: placeholder(JobKey::EndTime),
            params: placeholder(JobKey::Params),
            result_path: placeholder(JobKey::ResultPath),
            retries_count: placeholder(JobKey::RetriesCount),
            ttl: placeholder(JobKey::Ttl),
        }
    }

    pub fn to_item(&self) -> Result<Item> {
        let attributes: HashMap<String, AttributeValue> = serde_dynamo::to_item(self)?;
        Ok(Item::from(attributes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_match_variants() {
        for key in JobKey::ALL {
            assert_eq!(key.as_str(), format!("{key:?}"));
        }
        assert_eq!(JobKey::names().len(), 14);
        assert_eq!(JobKey::names()[0], "BatchId");
    }

    #[test]
    fn batch_ids_are_simple_uuids_and_unique() {
        let first = new_batch_id();
        let second = new_batch_id();

        assert_eq!(first.len(), 32);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(first, second);
    }

    #[test]
    fn sample_record_serializes_every_job_key_as_string() {
        let item = JobRecord::sample("abc123").to_item().unwrap();

        assert_eq!(item.len(), JobKey::ALL.len());
        for key in JobKey::ALL {
            assert!(item.get_string(key.as_str()).is_some(), "missing {key}");
        }
        assert_eq!(item.get_string("BatchId"), Some(&"abc123".to_string()));
        assert_eq!(item.get_string("JobId"), Some(&"This is JobId.".to_string()));
        assert_eq!(
            item.get_string("RetriesCount"),
            Some(&"This is RetriesCount.".to_string())
        );
    }
}
