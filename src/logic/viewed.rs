use std::io::Write;

/// What: Append a viewed record id to the audit log under the logs directory.
///
/// Input: `id` of the record whose details were opened; the line is timestamped.
///
/// Output: `Ok(())` on success; otherwise an I/O error.
///
/// Details: Writes to logs_dir/viewed_log.log, prefixing the id with a UTC timestamp.
pub fn log_viewed(id: &str) -> std::io::Result<()> {
    let mut path = crate::theme::logs_dir();
    path.push("viewed_log.log");
    let mut f = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .ok();
    let when = crate::util::ts_to_date(now);
    writeln!(f, "{when} {id}")?;
    Ok(())
}
