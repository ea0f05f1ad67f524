use client::section;
use dioxus::prelude::*;
use shared_types::filter_rows;
use shared_ui::{
    Alert, Card, CardContent, CardHeader, PageHeader, SkeletonRows, TextField,
};

use crate::routes::Route;
use crate::scope::use_view_scope;
use crate::use_services;

#[component]
pub fn ClassListPage() -> Element {
    let services = use_services();
    let scope = use_view_scope();
    let mut search = use_signal(String::new);

    let mut data = use_resource(move || {
        let api = services.api.clone();
        let scope = scope.clone();
        async move { scope.run(section("classes", api.classes())).await }
    });

    let loaded = data.read().clone().flatten();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./teacher.css") }

        div { class: "teacher-page",
            PageHeader { title: "My Classes", subtitle: "Classes you teach this term" }

            TextField {
                placeholder: "Search by class, section or subject...",
                value: search(),
                on_input: move |e: FormEvent| search.set(e.value()),
            }

            match loaded {
                None => rsx! { SkeletonRows { rows: 4 } },
                Some(classes) => {
                    let rows = filter_rows(&classes.value, &search(), |c| {
                        format!("{} {} {}", c.name, c.section, c.subject)
                    });
                    rsx! {
                        if let Some(message) = classes.error {
                            Alert { message, on_retry: move |_| data.restart() }
                        } else if rows.is_empty() {
                            p { class: "teacher-empty",
                                if search().trim().is_empty() { "No classes assigned yet." } else { "No classes match your search." }
                            }
                        }
                        div { class: "class-grid",
                            for class in rows {
                                Link {
                                    key: "{class.id}",
                                    to: Route::TeacherClassDetail { id: class.id },
                                    class: "class-tile",
                                    Card {
                                        CardHeader { title: class.label(), description: class.subject.clone() }
                                        CardContent {
                                            p { class: "class-tile-meta", "{class.student_count} students" }
                                            if !class.schedule.is_empty() {
                                                p { class: "class-tile-meta", "{class.schedule}" }
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
