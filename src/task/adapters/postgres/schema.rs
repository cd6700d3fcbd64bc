//! Diesel schema for task and audit log persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Sanitised task title.
        title -> Text,
        /// Sanitised task description.
        description -> Text,
        /// Creation timestamp, immutable after insert.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only audit log entries.
    audit_logs (id) {
        /// Audit entry identifier.
        id -> Uuid,
        /// Time the entry was recorded.
        timestamp -> Timestamptz,
        /// Recorded action label.
        #[max_length = 50]
        action -> Varchar,
        /// Identifier of the mutated task. Weak reference, no foreign key.
        task_id -> Uuid,
        /// New field values as JSON, when the mutation carried any.
        updated_content -> Nullable<Jsonb>,
        /// Free-form operator notes.
        notes -> Nullable<Text>,
    }
}
