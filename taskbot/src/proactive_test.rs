use super::*;

/// Returns queued values in order, then repeats the last one.
struct Scripted(Vec<f64>);

impl RandomSource for Scripted {
    fn next_unit(&mut self) -> f64 {
        if self.0.len() > 1 { self.0.remove(0) } else { self.0[0] }
    }
}

#[test]
fn pools_exist_for_three_pages() {
    assert_eq!(pool_for("dashboard").len(), 3);
    assert_eq!(pool_for("projects").len(), 2);
    assert_eq!(pool_for("my-tasks").len(), 2);
    assert!(pool_for("profile").is_empty());
    assert!(pool_for("").is_empty());
}

#[test]
fn should_arm_requires_roll_above_threshold() {
    assert!(should_arm("dashboard", 0.7, &mut Scripted(vec![0.71])));
    assert!(!should_arm("dashboard", 0.7, &mut Scripted(vec![0.7])));
    assert!(!should_arm("dashboard", 0.7, &mut Scripted(vec![0.2])));
}

#[test]
fn should_arm_never_on_page_without_pool() {
    let mut random = Scripted(vec![0.99]);
    assert!(!should_arm("profile", 0.7, &mut random));
    // No roll consumed for an empty pool.
    assert!((random.next_unit() - 0.99).abs() < f64::EPSILON);
}

#[test]
fn pick_returns_member_of_page_pool() {
    let got = pick("projects", &mut Scripted(vec![0.9]));
    assert_eq!(got, Some(PROJECTS[1]));
    let got = pick("my-tasks", &mut Scripted(vec![0.0]));
    assert_eq!(got, Some(MY_TASKS[0]));
}

#[test]
fn pick_on_unknown_page_is_none() {
    assert_eq!(pick("help", &mut Scripted(vec![0.5])), None);
}
