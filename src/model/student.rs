use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RegNo(pub u32);

/// A registration record. The metadata mapping is copied at both
/// boundary crossings (construction and the accessor), so no caller
/// ever holds a reference to the internal state.
#[derive(Clone, Debug)]
pub struct Student {
    name: String,
    reg_no: RegNo,
    metadata: HashMap<String, String>,
}

impl Student {
    /// Build a record from a caller-supplied mapping. The mapping is
    /// cloned, not stored: mutating the caller's original afterwards
    /// has no effect on the record.
    pub fn new(name: &str, reg_no: RegNo, metadata: &HashMap<String, String>) -> Student {
        Student {
            name: name.to_owned(),
            reg_no,
            metadata: metadata.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reg_no(&self) -> RegNo {
        self.reg_no
    }

    /// Return a fresh copy of the metadata mapping. Every call yields a
    /// distinct mapping; mutating a returned copy affects neither the
    /// record nor any previously returned copy.
    pub fn metadata(&self) -> HashMap<String, String> {
        self.metadata.clone()
    }
}

#[cfg(test)]
fn sample_metadata() -> HashMap<String, String> {
    [("City", "Vallentuna"), ("Company", "Truesec")]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
}

#[test]
fn test_accessors_return_construction_values() {
    let student = Student::new("Johan", RegNo(1234), &sample_metadata());
    assert_eq!(student.name(), "Johan");
    assert_eq!(student.reg_no(), RegNo(1234));
    assert_eq!(student.metadata(), sample_metadata());
}

#[test]
fn test_mutating_original_mapping_leaves_record_untouched() {
    let mut metadata = sample_metadata();
    let student = Student::new("Johan", RegNo(1234), &metadata);
    metadata.insert("City".to_owned(), "Stockholm".to_owned());
    metadata.remove("Company");
    let reported = student.metadata();
    assert_eq!(reported.get("City").map(String::as_str), Some("Vallentuna"));
    assert_eq!(reported.get("Company").map(String::as_str), Some("Truesec"));
}

#[test]
fn test_accessor_copies_are_independent() {
    let student = Student::new("Johan", RegNo(1234), &sample_metadata());
    let mut first = student.metadata();
    let second = student.metadata();
    assert_eq!(first, second);
    first.remove("Company");
    first.insert("City".to_owned(), "Stockholm".to_owned());
    assert_eq!(second, sample_metadata());
    assert_eq!(student.metadata(), sample_metadata());
}

#[test]
fn test_empty_mapping_is_a_valid_input() {
    let student = Student::new("Johan", RegNo(1234), &HashMap::new());
    assert!(student.metadata().is_empty());
}
