use crate::model::Student;

pub fn display_record(student: &Student) {
    println!("{} (reg no {}):", student.name(), student.reg_no().0);
    let mut entries = student.metadata().into_iter().collect::<Vec<_>>();
    entries.sort_by_key(|(key, _)| key.clone());
    if entries.is_empty() {
        println!("  (no metadata)");
    }
    for (key, value) in entries {
        println!("  - {}: {}", key, value);
    }
    println!();
}
