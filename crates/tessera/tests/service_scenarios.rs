//! End-to-end scenarios through the service facade, for every backend.

use tessera::{
    RegistryError, ServiceConfig, StackHealth, StoreBackend, Widget, WidgetDescription,
    WidgetId, WidgetService,
};

fn services() -> impl Iterator<Item = WidgetService> {
    [StoreBackend::Locked, StoreBackend::Snapshot]
        .into_iter()
        .map(|backend| {
            WidgetService::from_config(&ServiceConfig {
                backend,
                ..ServiceConfig::default()
            })
        })
}

fn description() -> WidgetDescription {
    WidgetDescription::new()
        .with_x(10)
        .with_y(20)
        .with_width(30)
        .with_height(40)
}

fn ids(widgets: &[Widget]) -> Vec<WidgetId> {
    widgets.iter().map(|w| w.id()).collect()
}

#[test]
fn test_bring_to_front_and_send_to_back() {
    for service in services() {
        let a = service.create(&description()).unwrap();
        let b = service.create(&description()).unwrap();
        let c = service.create(&description()).unwrap();

        service.edit(a.id(), &WidgetDescription::new().with_z(i32::MAX)).unwrap();
        assert_eq!(ids(&service.list_all()), vec![b.id(), c.id(), a.id()]);

        service.edit(c.id(), &WidgetDescription::new().with_z(0)).unwrap();
        assert_eq!(ids(&service.list_all()), vec![c.id(), b.id(), a.id()]);
        assert_eq!(service.snapshot().health(), StackHealth::Dense);
    }
}

#[test]
fn test_invalid_edit_leaves_widget_untouched() {
    for service in services() {
        let widget = service.create(&description()).unwrap();
        let err = service
            .edit(widget.id(), &WidgetDescription::new().with_width(-1).with_z(0))
            .unwrap_err();
        assert!(err.is_caller_error());
        assert_eq!(service.get(widget.id()).unwrap(), widget);
    }
}

#[test]
fn test_empty_edit_changes_nothing() {
    for service in services() {
        let widget = service.create(&description()).unwrap();
        let edited = service.edit(widget.id(), &WidgetDescription::new()).unwrap();
        assert_eq!(edited, widget);
    }
}

#[test]
fn test_not_found_message_names_id() {
    for service in services() {
        let id = WidgetId::new();
        let err = service.get(id).unwrap_err();
        assert_eq!(err, RegistryError::not_found(id));
        assert_eq!(err.to_string(), format!("Widget with id = {id} not found"));
        assert!(!service.delete(id));
    }
}

#[test]
fn test_paging_walks_whole_listing() {
    for service in services() {
        for z in [3, 0, 0, 2, 1, 7, 0] {
            service.create(&description().with_z(z)).unwrap();
        }
        let first = service.list_page(Some(-1), Some(3));
        assert_eq!(first.current_page, 0);
        assert_eq!(first.total_pages, 3);

        let mut walked = Vec::new();
        for page in 0..first.total_pages as i64 {
            walked.extend(service.list_page(Some(page), Some(3)).widgets);
        }
        assert_eq!(walked, service.list_all());
        assert!(service.list_page(Some(3), Some(3)).is_empty());
    }
}

#[test]
fn test_listing_serializes_with_wire_names() {
    let service = WidgetService::default();
    service.create(&description()).unwrap();

    let page = serde_json::to_value(service.list_page(None, None)).unwrap();
    assert_eq!(page["totalLength"], 1);
    assert_eq!(page["widgets"][0]["width"], 30);
    assert!(page["widgets"][0]["modifiedDate"].is_string());
}

#[test]
fn test_clear_resets_z_assignment() {
    for service in services() {
        for _ in 0..3 {
            service.create(&description()).unwrap();
        }
        service.clear();
        assert!(service.is_empty());
        assert_eq!(service.create(&description()).unwrap().z, 0);
    }
}
