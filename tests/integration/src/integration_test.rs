//! End-to-end tests: plugins on disk, a consumer, one registry.

use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use uix_plugin::{DiscoveryConfig, PluginDiscovery, register_all};
use uix_registry::{ExportConsumer, ExportHandler, Plugin, RegistryConfig, UiExports, handler};
use uix_test_utils::TestPluginDir;

/// Collects `hacks` exports and counts plugins, like a bundle builder would
#[derive(Default)]
struct HackCollector {
    hacks: Arc<Mutex<Vec<Value>>>,
    plugin_count: Mutex<usize>,
}

impl ExportConsumer for HackCollector {
    fn export_handler(&self, export_type: &str) -> Option<ExportHandler> {
        if export_type != "hacks" {
            return None;
        }
        let hacks = Arc::clone(&self.hacks);
        Some(handler(move |_, spec| {
            let mut hacks = hacks.lock().unwrap();
            match spec {
                Value::Array(items) => hacks.extend(items.iter().cloned()),
                other => hacks.push(other.clone()),
            }
            Ok(())
        }))
    }

    fn consume_plugin(&self, _plugin: &Plugin) -> uix_registry::Result<()> {
        *self.plugin_count.lock().unwrap() += 1;
        Ok(())
    }
}

fn kibana_like_tree() -> TestPluginDir {
    let dir = TestPluginDir::new();
    dir.add_plugin(
        "kibana",
        r#"
app = { title = "Kibana", description = "the kibana you know and love", main = "plugins/kibana/kibana" }
links = [
  { id = "kibana:discover", title = "Discover", order = -1003, url = "/app/kibana#/discover" },
  { id = "kibana:visualize", title = "Visualize", order = -1002, url = "/app/kibana#/visualize" },
]
visTypes = ["plugins/kbn_vislib_vis_types/kbn_vislib_vis_types"]
docViews = ["plugins/kbn_doc_views/views/table", "plugins/kbn_doc_views/views/json"]
hacks = ["plugins/kibana/hacks"]
"#,
    );
    dir.add_plugin(
        "status_page",
        r#"
app = { title = "Server Status", hidden = true, url = "/status" }
hacks = ["plugins/status_page/hack"]
"#,
    );
    dir.add_plugin(
        "timelion",
        r#"
app = { title = "Timelion", order = -1000 }
visTypes = ["plugins/timelion/vis", "plugins/kbn_vislib_vis_types/kbn_vislib_vis_types"]
bundle = { id = "timelion", modules = ["plugins/timelion/app"] }

[ui_exports.aliases]
"ui/chrome/nav" = ["plugins/timelion/nav"]
"#,
    );
    dir
}

fn build(dir: &TestPluginDir, consumer: Arc<HackCollector>) -> (UiExports, Vec<Plugin>) {
    let discovered = PluginDiscovery::new(DiscoveryConfig {
        scan_dirs: vec![dir.scan_dir()],
        paths: vec![],
    })
    .discover()
    .unwrap();

    let mut registry = UiExports::new(RegistryConfig::new("/mybase"));
    registry.add_consumer(consumer);
    let plugins = register_all(&mut registry, &discovered).unwrap();
    (registry, plugins)
}

#[test]
fn test_full_registration_aggregates_every_collection() {
    let dir = kibana_like_tree();
    let consumer = Arc::new(HackCollector::default());
    let (registry, plugins) = build(&dir, Arc::clone(&consumer));

    // Apps: visible in discovery order, then hidden
    let ids: Vec<&str> = registry.all_apps().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["kibana", "timelion", "status_page"]);
    assert_eq!(registry.hidden_app("status_page").unwrap().url, "/status");
    assert!(registry.app("status_page").is_none());

    // Each plugin sees only its own apps
    let owned: Vec<usize> = plugins.iter().map(|p| p.apps().unwrap().len()).collect();
    assert_eq!(owned, vec![1, 1, 1]);

    // Nav links: explicit links plus listed apps, sorted by order
    let nav: Vec<&str> = registry
        .nav_links()
        .in_order()
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(
        nav,
        vec!["kibana:discover", "kibana:visualize", "timelion", "kibana"]
    );
    assert_eq!(
        registry.nav_link("kibana:discover").unwrap().url,
        "/mybase/app/kibana#/discover"
    );

    // Aliases: union across plugins, glob lookup with base-name matching
    assert_eq!(
        registry.find(["visTypes"]),
        vec![
            &json!("plugins/kbn_vislib_vis_types/kbn_vislib_vis_types"),
            &json!("plugins/timelion/vis"),
        ]
    );
    assert_eq!(registry.find(["nav"]), vec![&json!("plugins/timelion/nav")]);
    assert_eq!(registry.find(["docViews", "doc*"]).len(), 4);

    // Bundles in registration order
    assert_eq!(
        registry.bundle_providers(),
        &[json!({ "id": "timelion", "modules": ["plugins/timelion/app"] })]
    );

    // The consumer handled every `hacks` export and saw every plugin
    assert_eq!(
        *consumer.hacks.lock().unwrap(),
        vec![json!("plugins/kibana/hacks"), json!("plugins/status_page/hack")]
    );
    assert_eq!(*consumer.plugin_count.lock().unwrap(), 3);
    assert!(registry.find(["hacks"]).is_empty());
}

#[test]
fn test_without_consumer_unknown_type_stops_registration() {
    let dir = kibana_like_tree();
    let discovered = PluginDiscovery::new(DiscoveryConfig {
        scan_dirs: vec![dir.scan_dir()],
        paths: vec![],
    })
    .discover()
    .unwrap();

    let mut registry = UiExports::default();
    let err = register_all(&mut registry, &discovered).unwrap_err();

    assert_eq!(
        err.to_string(),
        "unknown export types hacks in plugin kibana"
    );
    assert!(registry.all_apps().is_empty());
}

#[test]
fn test_queries_between_registrations_see_partial_state() {
    let mut registry = UiExports::default();
    let mut first = Plugin::new("first").with_export("visTypes", json!(["a"]));
    registry.consume_plugin(&mut first).unwrap();
    assert_eq!(registry.find(["visTypes"]).len(), 1);

    let mut second = Plugin::new("second").with_export("visTypes", json!(["b"]));
    registry.consume_plugin(&mut second).unwrap();
    assert_eq!(registry.find(["visTypes"]).len(), 2);
}
