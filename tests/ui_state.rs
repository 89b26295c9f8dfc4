use chrono::NaiveDate;
use ems_lite::api::{AttendanceStatus, Employee, NewAttendance};
use ems_lite::ui::components::{BannerSlot, Banners, LoadState};
use ems_lite::ui::core::{Action, BannerKind, Mutation, Page, TaskManager};
use std::time::Duration;

#[test]
fn test_banner_expire_only_for_its_generation() {
    let mut slot = BannerSlot::default();
    let first = slot.set("✅ Employee added successfully!".to_string());
    let second = slot.set("✅ Employee deleted successfully!".to_string());
    assert!(second > first);

    assert!(!slot.expire(first));
    assert_eq!(slot.text(), Some("✅ Employee deleted successfully!"));

    assert!(slot.expire(second));
    assert_eq!(slot.text(), None);
    // a second fire for the same generation is a no-op
    assert!(!slot.expire(second));
}

#[test]
fn test_banner_clear_bumps_generation() {
    let mut slot = BannerSlot::default();
    let generation = slot.set("❌ Failed".to_string());

    slot.clear();
    assert_eq!(slot.text(), None);
    assert!(slot.generation() > generation);

    // clearing an empty slot changes nothing
    let idle = slot.generation();
    slot.clear();
    assert_eq!(slot.generation(), idle);
}

#[tokio::test]
async fn test_banner_change_aborts_pending_timer() {
    let mut slot = BannerSlot::default();
    slot.set("✅ Attendance marked successfully!".to_string());

    let timer = tokio::spawn(std::future::pending::<()>());
    slot.arm(timer.abort_handle());
    slot.set("✅ Attendance marked successfully!".to_string());

    let err = timer.await.unwrap_err();
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn test_rearming_aborts_previous_timer() {
    let mut slot = BannerSlot::default();
    slot.set("❌ Failed to delete employee".to_string());

    let old = tokio::spawn(std::future::pending::<()>());
    let new = tokio::spawn(std::future::pending::<()>());
    slot.arm(old.abort_handle());
    slot.arm(new.abort_handle());

    assert!(old.await.unwrap_err().is_cancelled());
    assert!(!new.is_finished());
    new.abort();
}

#[test]
fn test_banners_per_kind() {
    let mut banners = Banners::default();
    assert_eq!(banners.height(), 0);

    banners.slot_mut(BannerKind::Error).set("❌ Failed to fetch employees".to_string());
    assert_eq!(banners.height(), 1);
    assert_eq!(banners.slot(BannerKind::Success).text(), None);

    banners.slot_mut(BannerKind::Success).set("✅ Employee added successfully!".to_string());
    assert_eq!(banners.height(), 2);

    banners.clear_all();
    assert_eq!(banners.height(), 0);
}

#[test]
fn test_load_state_latest_load_wins() {
    let mut state = LoadState::default();
    assert!(!state.is_loading());

    let first = state.begin();
    let second = state.begin();
    assert!(state.is_loading());
    assert!(!state.is_current(first));

    // the superseded load cannot clear the flag
    assert!(!state.finish(first));
    assert!(state.is_loading());

    assert!(state.finish(second));
    assert!(!state.is_loading());
    assert!(!state.finish(second));
    assert_eq!(state.completed(), 1);
}

#[test]
fn test_page_navigation_wraps() {
    assert_eq!(Page::Dashboard.next(), Page::Employees);
    assert_eq!(Page::Attendance.next(), Page::Dashboard);
    assert_eq!(Page::Dashboard.previous(), Page::Attendance);
    assert_eq!(Page::from_name("attendance"), Some(Page::Attendance));
    assert_eq!(Page::from_name("Reports"), None);
    assert_eq!(Page::default(), Page::Dashboard);
}

#[test]
fn test_mutation_page_and_description() {
    let create = Mutation::CreateEmployee(Employee {
        employee_id: "EMP007".to_string(),
        full_name: "Jane Roe".to_string(),
        email: "jane@company.com".to_string(),
        department: "Engineering".to_string(),
    });
    assert_eq!(create.page(), Page::Employees);
    assert_eq!(create.describe(), "Create employee EMP007 'Jane Roe'");

    let delete = Mutation::DeleteEmployee("EMP001".to_string());
    assert_eq!(delete.page(), Page::Employees);
    assert_eq!(delete.describe(), "Delete employee EMP001");

    let mark = Mutation::MarkAttendance(NewAttendance {
        employee_id: "EMP002".to_string(),
        attendance_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        status: AttendanceStatus::Absent,
    });
    assert_eq!(mark.page(), Page::Attendance);
    assert_eq!(mark.describe(), "Mark EMP002 Absent on 2025-01-15");
}

#[tokio::test(start_paused = true)]
async fn test_timer_counts_from_schedule_time() {
    let (mut tasks, mut rx) = TaskManager::new();
    let _timer = tasks.schedule(Duration::from_secs(3), Action::Quit);

    // the clock moves before the timer task has run at all
    tokio::time::advance(Duration::from_secs(3)).await;

    let fired = tokio::time::timeout(Duration::from_millis(10), rx.recv()).await;
    assert!(matches!(fired, Ok(Some(Action::Quit))));
}

#[tokio::test(start_paused = true)]
async fn test_aborted_timer_never_fires() {
    let (mut tasks, mut rx) = TaskManager::new();
    let timer = tasks.schedule(Duration::from_secs(3), Action::Quit);
    timer.abort();

    tokio::time::advance(Duration::from_secs(5)).await;
    let fired = tokio::time::timeout(Duration::from_millis(10), rx.recv()).await;
    assert!(fired.is_err());
}
