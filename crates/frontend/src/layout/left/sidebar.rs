//! Sidebar: resource sections grouped the way the public site is organised

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::domain::common::ResourceKind;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<ResourceKind>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "site",
            label: "Site",
            items: vec![ResourceKind::CompanyInfo, ResourceKind::Hero, ResourceKind::Value],
        },
        MenuGroup {
            id: "offering",
            label: "Offering",
            items: vec![ResourceKind::Service, ResourceKind::Product],
        },
        MenuGroup {
            id: "relations",
            label: "Relations",
            items: vec![ResourceKind::Partner, ResourceKind::Client],
        },
        MenuGroup {
            id: "publications",
            label: "Publications",
            items: vec![ResourceKind::News, ResourceKind::Event, ResourceKind::Career],
        },
        MenuGroup {
            id: "inbox",
            label: "Inbox",
            items: vec![ResourceKind::Contact],
        },
    ]
}

pub fn kind_icon(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::CompanyInfo => "building",
        ResourceKind::Hero => "image",
        ResourceKind::Service => "briefcase",
        ResourceKind::Value => "heart",
        ResourceKind::Product => "package",
        ResourceKind::Partner => "link",
        ResourceKind::Client => "users",
        ResourceKind::News => "file-text",
        ResourceKind::Event => "calendar",
        ResourceKind::Career => "award",
        ResourceKind::Contact => "mail",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let collapsed = RwSignal::new(Vec::<&'static str>::new());

    view! {
        <div class="app-sidebar__content">
            {menu_groups().into_iter().map(|group| {
                let gid = group.id;
                let items = group.items;
                view! {
                    <div>
                        <div
                            class="app-sidebar__item app-sidebar__group"
                            on:click=move |_| collapsed.update(|ids| {
                                if let Some(pos) = ids.iter().position(|x| *x == gid) {
                                    ids.remove(pos);
                                } else {
                                    ids.push(gid);
                                }
                            })
                        >
                            <span>{group.label}</span>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || !collapsed.get().contains(&gid)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=move || !collapsed.get().contains(&gid)>
                            <div class="app-sidebar__children">
                                {items.iter().map(|&kind| view! {
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || ctx.is_active(kind)
                                        on:click=move |_| ctx.open_list(kind)
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(kind_icon(kind))}
                                            <span>{kind.list_name()}</span>
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_resource_has_a_menu_entry() {
        let listed: Vec<ResourceKind> = menu_groups().into_iter().flat_map(|g| g.items).collect();
        assert_eq!(listed.len(), ResourceKind::ALL.len());
        for kind in ResourceKind::ALL {
            assert!(listed.contains(&kind), "{:?} missing from sidebar", kind);
        }
    }
}
