use client::section;
use dioxus::prelude::*;
use shared_types::{
    AttendanceCalendarDay, AttendanceRecord, AttendanceStatus, MarkAttendanceRequest,
};
use shared_ui::{
    use_toast, Alert, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardHeader, DataTable, DataTableBody, DataTableCell, DataTableEmpty, DataTableHeader,
    DataTableRow, PageHeader, SkeletonRows, TabContent, TabList, TabTrigger, Tabs, TextField,
    ToastOptions,
};

use super::ClassPicker;
use crate::format_helpers::{format_date_human, format_percent, today_iso};
use crate::scope::use_view_scope;
use crate::use_services;

fn status_variant(status: AttendanceStatus) -> BadgeVariant {
    match status {
        AttendanceStatus::Present => BadgeVariant::Success,
        AttendanceStatus::Absent => BadgeVariant::Danger,
        AttendanceStatus::Late => BadgeVariant::Warning,
        AttendanceStatus::Excused => BadgeVariant::Neutral,
    }
}

/// Mark a class register for a day and review its history.
#[component]
pub fn AttendancePage() -> Element {
    let services = use_services();
    let scope = use_view_scope();

    let mut selected = use_signal(|| None::<i64>);

    let mut classes = use_resource(move || {
        let api = services.api.clone();
        let scope = scope.clone();
        async move { scope.run(section("classes", api.classes())).await }
    });

    // Default to the first class once the list arrives.
    use_effect(move || {
        if selected.peek().is_some() {
            return;
        }
        if let Some(Some(loaded)) = &*classes.read() {
            if let Some(first) = loaded.value.first() {
                selected.set(Some(first.id));
            }
        }
    });

    let loaded = classes.read().clone().flatten();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./teacher.css") }

        div { class: "teacher-page",
            PageHeader { title: "Attendance", subtitle: "Take the register and review attendance history" }

            match loaded {
                None => rsx! { SkeletonRows { rows: 4 } },
                Some(fetched) => rsx! {
                    if let Some(message) = fetched.error {
                        Alert { message, on_retry: move |_| classes.restart() }
                    }
                    div { class: "toolbar",
                        ClassPicker {
                            classes: fetched.value.clone(),
                            selected: selected(),
                            on_change: move |id: Option<i64>| selected.set(id),
                        }
                    }
                    if let Some(class_id) = selected() {
                        Tabs { key: "{class_id}", default_value: "mark", horizontal: true,
                            TabList {
                                TabTrigger { value: "mark", index: 0usize, "Take attendance" }
                                TabTrigger { value: "report", index: 1usize, "Report" }
                                TabTrigger { value: "calendar", index: 2usize, "Calendar" }
                            }
                            TabContent { value: "mark", index: 0usize,
                                RegisterSheet { class_id }
                            }
                            TabContent { value: "report", index: 1usize,
                                AttendanceReport { class_id }
                            }
                            TabContent { value: "calendar", index: 2usize,
                                AttendanceCalendar { class_id }
                            }
                        }
                    } else if fetched.value.is_empty() {
                        p { class: "teacher-empty", "No classes assigned yet." }
                    }
                },
            }
        }
    }
}

/// The register for one class and day. Unmarked students are left out of
/// the saved sheet.
#[component]
fn RegisterSheet(class_id: i64) -> Element {
    let services = use_services();
    let scope = use_view_scope();
    let toast = use_toast();

    let mut date = use_signal(today_iso);
    let mut sheet = use_signal(Vec::<AttendanceRecord>::new);
    let mut saving = use_signal(|| false);

    let api = services.api.clone();
    let mut records = use_resource(move || {
        let api = api.clone();
        let scope = scope.clone();
        let day = date();
        async move {
            let fetched = scope
                .run(section("attendance", api.attendance(class_id, &day)))
                .await?;
            sheet.set(fetched.value.clone());
            Some(fetched.error)
        }
    });

    let mut set_status = move |student_id: i64, status: AttendanceStatus| {
        if let Some(row) = sheet.write().iter_mut().find(|r| r.student_id == student_id) {
            row.status = Some(status);
        }
    };

    let mark_all_present = move |_: MouseEvent| {
        for row in sheet.write().iter_mut() {
            row.status = Some(AttendanceStatus::Present);
        }
    };

    let save = move |_: MouseEvent| {
        let request = MarkAttendanceRequest::from_sheet(&date(), &sheet.read());
        if request.records.is_empty() {
            toast.error("Mark at least one student first.".to_string(), ToastOptions::new());
            return;
        }
        let api = services.api.clone();
        spawn(async move {
            saving.set(true);
            match api.mark_attendance(class_id, &request).await {
                Ok(()) => toast.success(
                    format!("Saved attendance for {} students", request.records.len()),
                    ToastOptions::new(),
                ),
                Err(err) => toast.error(err.user_message(), ToastOptions::new()),
            }
            saving.set(false);
        });
    };

    let state = records.read().clone();
    let rows = sheet.read().clone();
    let marked = rows.iter().filter(|r| r.status.is_some()).count();

    rsx! {
        div { class: "toolbar",
            TextField {
                label: "Date",
                input_type: "date",
                value: date(),
                on_input: move |e: FormEvent| date.set(e.value()),
            }
            span { class: "toolbar-meta", "{marked} of {rows.len()} marked" }
            div { class: "toolbar-spacer" }
            Button {
                variant: ButtonVariant::Outline,
                disabled: rows.is_empty(),
                onclick: mark_all_present,
                "Mark all present"
            }
            Button {
                variant: ButtonVariant::Primary,
                disabled: marked == 0 || saving(),
                loading: saving(),
                onclick: save,
                "Save attendance"
            }
        }

        match state {
            None => rsx! { SkeletonRows { rows: 6 } },
            Some(error) => rsx! {
                if let Some(message) = error.flatten() {
                    Alert { message, on_retry: move |_| records.restart() }
                }
                DataTable {
                    DataTableHeader {
                        columns: vec!["Roll No.".to_string(), "Student".to_string(), "Status".to_string()],
                    }
                    DataTableBody {
                        if rows.is_empty() {
                            DataTableEmpty { columns: 3, message: "No students enrolled." }
                        }
                        for row in rows {
                            DataTableRow { key: "{row.student_id}",
                                DataTableCell { "{row.roll_number}" }
                                DataTableCell { "{row.student_name}" }
                                DataTableCell {
                                    div { class: "status-choices",
                                        for status in AttendanceStatus::ALL {
                                            Button {
                                                key: "{status.as_str()}",
                                                size: ButtonSize::Small,
                                                variant: if row.status == Some(status) { ButtonVariant::Primary } else { ButtonVariant::Outline },
                                                onclick: move |_| set_status(row.student_id, status),
                                                {status.label()}
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn AttendanceReport(class_id: i64) -> Element {
    let services = use_services();
    let scope = use_view_scope();

    let mut report = use_resource(move || {
        let api = services.api.clone();
        let scope = scope.clone();
        async move {
            scope
                .run(section("attendance report", api.attendance_report(class_id)))
                .await
        }
    });

    let loaded = report.read().clone().flatten();

    rsx! {
        match loaded {
            None => rsx! { SkeletonRows { rows: 5 } },
            Some(fetched) => rsx! {
                if let Some(message) = fetched.error {
                    Alert { message, on_retry: move |_| report.restart() }
                }
                DataTable {
                    DataTableHeader {
                        columns: ["Student", "Present", "Absent", "Late", "Excused", "Attendance"]
                            .iter()
                            .map(|c| c.to_string())
                            .collect::<Vec<_>>(),
                    }
                    DataTableBody {
                        if fetched.value.is_empty() {
                            DataTableEmpty { columns: 6, message: "No attendance recorded yet." }
                        }
                        for row in fetched.value {
                            DataTableRow { key: "{row.student_id}",
                                DataTableCell { "{row.student_name}" }
                                DataTableCell { "{row.present}" }
                                DataTableCell { "{row.absent}" }
                                DataTableCell { "{row.late}" }
                                DataTableCell { "{row.excused}" }
                                DataTableCell {
                                    Badge {
                                        variant: if row.percentage() >= 75.0 { BadgeVariant::Success } else { BadgeVariant::Warning },
                                        {format_percent(row.percentage())}
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn AttendanceCalendar(class_id: i64) -> Element {
    let services = use_services();
    let scope = use_view_scope();

    let mut days = use_resource(move || {
        let api = services.api.clone();
        let scope = scope.clone();
        async move {
            scope
                .run(section("attendance calendar", api.attendance_calendar(class_id)))
                .await
        }
    });

    let loaded = days.read().clone().flatten();

    rsx! {
        match loaded {
            None => rsx! { SkeletonRows { rows: 5 } },
            Some(fetched) => rsx! {
                if let Some(message) = fetched.error {
                    Alert { message, on_retry: move |_| days.restart() }
                }
                if fetched.value.is_empty() {
                    p { class: "teacher-empty", "No attendance recorded yet." }
                }
                div { class: "calendar-grid",
                    for day in fetched.value {
                        CalendarDay { key: "{day.date}", day }
                    }
                }
            },
        }
    }
}

#[component]
fn CalendarDay(day: AttendanceCalendarDay) -> Element {
    let counts = [
        (AttendanceStatus::Present, day.present),
        (AttendanceStatus::Absent, day.absent),
        (AttendanceStatus::Late, day.late),
        (AttendanceStatus::Excused, day.excused),
    ];

    rsx! {
        Card {
            CardHeader { title: format_date_human(&day.date) }
            CardContent {
                div { class: "calendar-counts",
                    for (status, count) in counts {
                        if count > 0 {
                            Badge { key: "{status.as_str()}", variant: status_variant(status),
                                "{status.label()}: {count}"
                            }
                        }
                    }
                }
            }
        }
    }
}
