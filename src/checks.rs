use crate::model::Student;
use eyre::{Result, bail, ensure};
use std::collections::HashMap;
use tracing::warn;

/// Verify that the record still reports exactly the entries captured at
/// construction time, whatever happened to the caller's mapping since.
pub fn ensure_unaliased(student: &Student, expected: &HashMap<String, String>) -> Result<()> {
    if expected.is_empty() {
        warn!("record {} carries no metadata", student.name());
    }
    let reported = student.metadata();
    if reported != *expected {
        bail!(
            "record {} leaked its internal metadata: expected {} entries, found {}",
            student.name(),
            expected.len(),
            reported.len()
        );
    }
    Ok(())
}

/// Obtain two copies from the accessor, mutate one, and verify that the
/// other and the record itself are untouched.
pub fn ensure_copies_independent(student: &Student) -> Result<()> {
    let mut first = student.metadata();
    let second = student.metadata();
    ensure!(
        first == second,
        "successive copies for record {} differ in content",
        student.name()
    );
    if let Some(key) = first.keys().next().cloned() {
        first.remove(&key);
        ensure!(
            second.contains_key(&key),
            "mutating one copy for record {} removed {} from another",
            student.name(),
            key
        );
        ensure!(
            student.metadata().contains_key(&key),
            "mutating a copy for record {} removed {} from the record itself",
            student.name(),
            key
        );
    }
    Ok(())
}

#[cfg(test)]
use crate::model::RegNo;

#[test]
fn test_checks_pass_for_any_record() {
    let metadata = std::iter::once(("City".to_owned(), "Vallentuna".to_owned())).collect();
    let student = Student::new("Johan", RegNo(1234), &metadata);
    assert!(ensure_unaliased(&student, &metadata).is_ok());
    assert!(ensure_copies_independent(&student).is_ok());
}

#[test]
fn test_unaliased_check_detects_divergence() {
    let mut metadata: HashMap<String, String> =
        std::iter::once(("City".to_owned(), "Vallentuna".to_owned())).collect();
    let student = Student::new("Johan", RegNo(1234), &metadata);
    metadata.insert("City".to_owned(), "Stockholm".to_owned());
    assert!(ensure_unaliased(&student, &metadata).is_err());
}

#[test]
fn test_checks_accept_empty_metadata() {
    let metadata = HashMap::new();
    let student = Student::new("Johan", RegNo(1234), &metadata);
    assert!(ensure_unaliased(&student, &metadata).is_ok());
    assert!(ensure_copies_independent(&student).is_ok());
}
