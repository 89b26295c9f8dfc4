mod common;

use common::{employees, records, FakeApi};
use ems_lite::api::DashboardStats;
use ems_lite::constants::{ERROR_FETCH_DATA, ERROR_LOAD_DASHBOARD};
use ems_lite::loader::{load_attendance_page, load_dashboard, Resource};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Barrier;

#[tokio::test]
async fn test_dashboard_all_succeed() {
    let api = FakeApi::with_data(employees(3), records(4));
    *api.stats.lock().unwrap() = DashboardStats {
        total_employees: 3,
        present_today: 2,
        total_records: 4,
    };

    let data = load_dashboard(&api).await;

    assert_eq!(data.stats.unwrap().present_today, 2);
    assert_eq!(data.recent_employees.len(), 3);
    assert_eq!(data.recent_attendance.len(), 4);
    assert!(data.failed.is_empty());
    assert!(data.error.is_none());
}

#[tokio::test]
async fn test_dashboard_issues_every_request() {
    let api = FakeApi::new();
    load_dashboard(&api).await;

    assert_eq!(api.call_count("get_stats"), 1);
    assert_eq!(api.call_count("list_employees"), 1);
    assert_eq!(api.call_count("list_attendance"), 1);
}

// Each fetch only returns once all of them are in flight
#[tokio::test]
async fn test_dashboard_fetches_run_concurrently() {
    let api = FakeApi::with_data(employees(2), records(2));
    *api.fetch_gate.lock().unwrap() = Some(Arc::new(Barrier::new(3)));

    let data = tokio::time::timeout(Duration::from_secs(2), load_dashboard(&api))
        .await
        .expect("dashboard fetches were issued one after another");
    assert!(data.failed.is_empty());
    assert_eq!(data.recent_employees.len(), 2);
}

#[tokio::test]
async fn test_attendance_page_fetches_run_concurrently() {
    let api = FakeApi::with_data(employees(2), records(3));
    *api.fetch_gate.lock().unwrap() = Some(Arc::new(Barrier::new(2)));

    let data = tokio::time::timeout(Duration::from_secs(2), load_attendance_page(&api))
        .await
        .expect("attendance page fetches were issued one after another");
    assert_eq!(data.employees.len(), 2);
    assert_eq!(data.records.len(), 3);
}

#[tokio::test]
async fn test_dashboard_stats_failure_keeps_lists() {
    let api = FakeApi::with_data(employees(3), records(12));
    api.fail_stats.store(true, Ordering::SeqCst);

    let data = load_dashboard(&api).await;

    assert_eq!(data.error.as_deref(), Some(ERROR_LOAD_DASHBOARD));
    assert_eq!(data.failed, vec![Resource::Stats]);
    assert!(data.stats.is_none());
    assert_eq!(data.recent_employees.len(), 3);
    assert_eq!(data.recent_attendance.len(), 10);
}

#[tokio::test]
async fn test_dashboard_each_single_failure_is_isolated() {
    let api = FakeApi::with_data(employees(2), records(2));
    api.fail_employees.store(true, Ordering::SeqCst);
    let data = load_dashboard(&api).await;
    assert!(data.stats.is_some());
    assert!(data.recent_employees.is_empty());
    assert_eq!(data.recent_attendance.len(), 2);
    assert_eq!(data.failed, vec![Resource::Employees]);

    let api = FakeApi::with_data(employees(2), records(2));
    api.fail_attendance.store(true, Ordering::SeqCst);
    let data = load_dashboard(&api).await;
    assert!(data.stats.is_some());
    assert_eq!(data.recent_employees.len(), 2);
    assert!(data.recent_attendance.is_empty());
    assert_eq!(data.failed, vec![Resource::Attendance]);
    assert_eq!(data.error.as_deref(), Some(ERROR_LOAD_DASHBOARD));
}

#[tokio::test]
async fn test_dashboard_all_fail_sets_one_error() {
    let api = FakeApi::new();
    api.fail_stats.store(true, Ordering::SeqCst);
    api.fail_employees.store(true, Ordering::SeqCst);
    api.fail_attendance.store(true, Ordering::SeqCst);

    let data = load_dashboard(&api).await;

    assert_eq!(data.failed.len(), 3);
    assert_eq!(data.error.as_deref(), Some(ERROR_LOAD_DASHBOARD));
    assert!(data.stats.is_none());
    assert!(data.recent_employees.is_empty());
    assert!(data.recent_attendance.is_empty());
}

#[tokio::test]
async fn test_dashboard_truncates_in_server_order() {
    for count in [0, 4, 5, 6, 20] {
        let api = FakeApi::with_data(employees(count), records(count.min(12)));
        let data = load_dashboard(&api).await;

        let expected: Vec<_> = employees(count).into_iter().take(5).collect();
        assert_eq!(data.recent_employees, expected, "employees, count {}", count);

        let expected: Vec<_> = records(count.min(12)).into_iter().take(10).collect();
        assert_eq!(data.recent_attendance, expected, "attendance, count {}", count);
    }
}

#[tokio::test]
async fn test_attendance_page_partial_failure() {
    let api = FakeApi::with_data(employees(3), records(12));
    api.fail_employees.store(true, Ordering::SeqCst);

    let data = load_attendance_page(&api).await;

    assert!(data.employees.is_empty());
    // the attendance page shows every record
    assert_eq!(data.records.len(), 12);
    assert_eq!(data.failed, vec![Resource::Employees]);
    assert_eq!(data.error.as_deref(), Some(ERROR_FETCH_DATA));
}

#[tokio::test]
async fn test_attendance_page_success() {
    let api = FakeApi::with_data(employees(2), records(3));
    let data = load_attendance_page(&api).await;

    assert_eq!(data.employees.len(), 2);
    assert_eq!(data.records, records(3));
    assert!(data.error.is_none());
    assert_eq!(api.call_count("get_stats"), 0);
}
