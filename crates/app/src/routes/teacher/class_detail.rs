use client::section;
use dioxus::prelude::*;
use shared_ui::{
    Alert, Button, ButtonVariant, Card, CardContent, CardHeader, DataTable, DataTableBody,
    DataTableCell, DataTableEmpty, DataTableHeader, DataTableRow, PageHeader, SkeletonRows,
};

use crate::routes::Route;
use crate::scope::use_view_scope;
use crate::use_services;

/// One class with its roster.
#[component]
pub fn ClassDetailPage(id: i64) -> Element {
    let services = use_services();
    let scope = use_view_scope();

    let mut data = use_resource(move || {
        let api = services.api.clone();
        let scope = scope.clone();
        async move { scope.run(section("class detail", api.class_detail(id))).await }
    });

    let loaded = data.read().clone().flatten();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./teacher.css") }

        div { class: "teacher-page",
            match loaded {
                None => rsx! { SkeletonRows { rows: 6 } },
                Some(fetched) if fetched.error.is_some() => rsx! {
                    PageHeader { title: "Class" }
                    Alert {
                        message: fetched.error.unwrap_or_default(),
                        on_retry: move |_| data.restart(),
                    }
                },
                Some(fetched) => {
                    let class = fetched.value;
                    let title = if class.section.is_empty() {
                        class.name.clone()
                    } else {
                        format!("{} - {}", class.name, class.section)
                    };
                    let roster_size = class.students.len();
                    rsx! {
                        PageHeader {
                            title,
                            subtitle: class.subject.clone(),
                            actions: rsx! {
                                Link { to: Route::TeacherAttendance {},
                                    Button { variant: ButtonVariant::Outline, "Take attendance" }
                                }
                                Link { to: Route::TeacherClasses {},
                                    Button { variant: ButtonVariant::Ghost, "Back to classes" }
                                }
                            },
                        }

                        div { class: "class-facts",
                            if !class.schedule.is_empty() {
                                span { class: "class-fact", "Schedule: {class.schedule}" }
                            }
                            if !class.room.is_empty() {
                                span { class: "class-fact", "Room: {class.room}" }
                            }
                            span { class: "class-fact", "{roster_size} students" }
                        }

                        Card {
                            CardHeader { title: "Roster" }
                            CardContent {
                                DataTable {
                                    DataTableHeader {
                                        columns: vec!["Roll No.".to_string(), "Name".to_string(), "Email".to_string()],
                                    }
                                    DataTableBody {
                                        if class.students.is_empty() {
                                            DataTableEmpty { columns: 3, message: "No students enrolled." }
                                        }
                                        for student in class.students {
                                            DataTableRow { key: "{student.id}",
                                                DataTableCell { "{student.roll_number}" }
                                                DataTableCell { {student.full_name()} }
                                                DataTableCell { "{student.email}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
