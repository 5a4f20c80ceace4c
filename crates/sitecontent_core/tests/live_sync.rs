mod common;

use common::{sqlite_store, FlakyStore};
use serde_json::json;
use sitecontent_core::model::entity::ServiceBlock;
use sitecontent_core::store::ChangeEvent;
use sitecontent_core::{
    AboutPageContent, BlogPageContent, ConcurrencyPolicy, ContentMutator, ContentSynchronizer,
    DocumentKey, DocumentStore, HomepageContent, JoinPageContent, PageContent,
    ServicesPageContent, SiteContent,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

fn services_page(title: &str) -> ServicesPageContent {
    ServicesPageContent {
        page_title: title.to_string(),
        blocks: vec![ServiceBlock {
            id: format!("{title}-block"),
            title: title.to_string(),
            order: 1,
            ..ServiceBlock::default()
        }],
        ..ServicesPageContent::default()
    }
}

#[test]
fn new_synchronizer_serves_templates_while_loading() {
    let sync = ContentSynchronizer::new(sqlite_store());
    assert!(sync.is_loading());
    assert_eq!(sync.content(), SiteContent::default());
    assert_eq!(sync.subscription_count(), 0);
}

#[test]
fn empty_store_yields_template_snapshots() {
    let sync = ContentSynchronizer::new(sqlite_store());
    sync.start();

    assert!(!sync.is_loading());
    assert!(sync.last_error().is_none());
    assert_eq!(sync.document::<AboutPageContent>(), AboutPageContent::default());
    assert_eq!(sync.subscription_count(), DocumentKey::ALL.len());
    for key in DocumentKey::ALL {
        assert_eq!(sync.revision(key), 0);
        assert_eq!(sync.page(key), PageContent::template(key));
    }
}

#[test]
fn start_reads_partial_remote_documents_merged() {
    let store = sqlite_store();
    store
        .set_whole("homepage", &json!({ "hero": { "description": "X" } }))
        .unwrap();

    let sync = ContentSynchronizer::new(store);
    sync.start();

    let home = sync.document::<HomepageContent>();
    assert_eq!(home.hero.description, "X");
    assert_eq!(home.faq, HomepageContent::default().faq);
    assert_eq!(sync.revision(DocumentKey::Homepage), 1);
}

#[test]
fn start_is_idempotent() {
    let sync = ContentSynchronizer::new(sqlite_store());
    sync.start();
    sync.start();
    assert_eq!(sync.subscription_count(), DocumentKey::ALL.len());
}

#[test]
fn failed_initial_read_falls_back_to_template_and_records_error() {
    let store = FlakyStore::new();
    store
        .set_whole("joinPage", &json!({ "formTitle": "Stored" }))
        .unwrap();
    store.fail_reads("joinPage");

    let sync = ContentSynchronizer::new(store.clone());
    sync.start();

    assert_eq!(sync.document::<JoinPageContent>(), JoinPageContent::default());
    let error = sync.last_error().expect("read failure should be recorded");
    assert!(error.contains("joinPage"));

    store.heal_reads();
    store
        .set_whole("joinPage", &json!({ "formTitle": "Corrected" }))
        .unwrap();
    assert_eq!(sync.document::<JoinPageContent>().form_title, "Corrected");
}

#[test]
fn refresh_rereads_and_clears_error_after_recovery() {
    let store = FlakyStore::new();
    store.fail_reads("aboutPage");
    let sync = ContentSynchronizer::new(store.clone());
    sync.start();
    assert!(sync.last_error().is_some());

    store.heal_reads();
    sync.refresh();
    assert!(sync.last_error().is_none());
}

#[test]
fn subscription_error_keeps_last_snapshot() {
    let store = FlakyStore::new();
    store
        .set_whole("blogPage", &json!({ "pageTitle": "News" }))
        .unwrap();
    let sync = ContentSynchronizer::new(store.clone());
    sync.start();

    store.inject_failure("blogPage", "connection reset");

    let blog = sync.document::<BlogPageContent>();
    assert_eq!(blog.page_title, "News");
    assert!(sync.last_error().unwrap().contains("connection reset"));
}

#[test]
fn refused_subscriptions_still_serve_initial_reads() {
    let store = FlakyStore::new();
    store
        .set_whole("joinPage", &json!({ "pageTitle": "Join" }))
        .unwrap();
    store.fail_subscriptions();

    let sync = ContentSynchronizer::new(store);
    sync.start();

    assert_eq!(sync.subscription_count(), 0);
    assert_eq!(sync.document::<JoinPageContent>().page_title, "Join");
    assert!(sync.last_error().unwrap().contains("subscribe"));
}

#[test]
fn stale_events_are_discarded() {
    let store = FlakyStore::new();
    let sync = ContentSynchronizer::new(store.clone());
    sync.start();

    store.inject_snapshot("servicesPage", json!({ "pageTitle": "Newer" }), 5);
    store.inject_snapshot("servicesPage", json!({ "pageTitle": "Older" }), 3);

    assert_eq!(sync.document::<ServicesPageContent>().page_title, "Newer");
    assert_eq!(sync.revision(DocumentKey::ServicesPage), 5);
}

#[test]
fn absent_snapshot_after_a_stored_revision_is_ignored() {
    let store = FlakyStore::new();
    store
        .set_whole("joinPage", &json!({ "pageTitle": "Stored" }))
        .unwrap();
    let sync = ContentSynchronizer::new(store.clone());
    sync.start();

    store.inject(ChangeEvent::Snapshot {
        key: "joinPage".to_string(),
        document: None,
    });

    assert_eq!(sync.document::<JoinPageContent>().page_title, "Stored");
    assert_eq!(sync.revision(DocumentKey::JoinPage), 1);
}

#[test]
fn consumers_see_every_change_until_dropped() {
    let store = sqlite_store();
    let sync = ContentSynchronizer::new(store.clone());
    sync.start();

    let titles = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&titles);
    let handle = sync.watch_document::<JoinPageContent>(move |page| {
        sink.lock().unwrap().push(page.page_title.clone());
    });
    let any_changes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&any_changes);
    let _all = sync.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(sync.consumer_count(), 2);

    store.set_whole("joinPage", &json!({ "pageTitle": "A" })).unwrap();
    store.set_whole("aboutPage", &json!({})).unwrap();
    store.set_whole("joinPage", &json!({ "pageTitle": "B" })).unwrap();
    drop(handle);
    store.set_whole("joinPage", &json!({ "pageTitle": "C" })).unwrap();

    assert_eq!(*titles.lock().unwrap(), vec!["A", "B"]);
    assert_eq!(any_changes.load(Ordering::SeqCst), 4);
    assert_eq!(sync.consumer_count(), 1);
}

#[test]
fn stop_keeps_snapshots_and_ignores_later_writes() {
    let store = sqlite_store();
    let sync = ContentSynchronizer::new(store.clone());
    sync.start();
    store.set_whole("joinPage", &json!({ "pageTitle": "Before" })).unwrap();

    sync.stop();
    assert_eq!(sync.subscription_count(), 0);
    assert_eq!(store.subscriber_count("joinPage"), 0);
    store.set_whole("joinPage", &json!({ "pageTitle": "After" })).unwrap();

    assert_eq!(sync.document::<JoinPageContent>().page_title, "Before");
}

#[test]
fn dropping_synchronizer_releases_store_subscriptions() {
    let store = sqlite_store();
    let sync = ContentSynchronizer::new(store.clone());
    sync.start();
    assert_eq!(store.subscriber_count("homepage"), 1);

    drop(sync);
    assert_eq!(store.subscriber_count("homepage"), 0);
}

#[test]
fn mutator_write_is_observed_deep_equal_by_every_synchronizer() {
    let store = sqlite_store();
    let writer_session = ContentSynchronizer::new(store.clone());
    let reader_session = ContentSynchronizer::new(store.clone());
    writer_session.start();
    reader_session.start();

    let mut about = writer_session.document::<AboutPageContent>();
    about.story_paragraphs = vec!["One paragraph".to_string()];
    about.team_members.truncate(1);
    ContentMutator::new(store.clone(), ConcurrencyPolicy::LastWriteWins)
        .write_document(&about)
        .unwrap();

    assert_eq!(writer_session.document::<AboutPageContent>(), about);
    assert_eq!(reader_session.document::<AboutPageContent>(), about);

    let fresh = ContentSynchronizer::new(store);
    fresh.start();
    assert_eq!(fresh.document::<AboutPageContent>(), about);
}

#[test]
fn concurrent_writers_converge_on_last_acknowledged_value() {
    let store = sqlite_store();
    let first = ContentSynchronizer::new(store.clone());
    let second = ContentSynchronizer::new(store.clone());
    first.start();
    second.start();

    let mutator = ContentMutator::new(store.clone(), ConcurrencyPolicy::LastWriteWins);
    thread::scope(|scope| {
        for title in ["Alpha", "Beta"] {
            let mutator = mutator.clone();
            scope.spawn(move || {
                for round in 0..20 {
                    mutator
                        .write_document(&services_page(&format!("{title}-{round}")))
                        .unwrap();
                }
            });
        }
    });

    let stored = store.get_once("servicesPage").unwrap().unwrap();
    assert_eq!(stored.revision, 40);
    let last: ServicesPageContent = serde_json::from_value(stored.value).unwrap();
    for sync in [&first, &second] {
        assert_eq!(sync.revision(DocumentKey::ServicesPage), 40);
        assert_eq!(sync.document::<ServicesPageContent>(), last);
    }
}

#[test]
fn consumer_last_payload_matches_snapshot_after_concurrent_writes() {
    for round in 0..50 {
        let store = sqlite_store();
        let sync = ContentSynchronizer::new(store.clone());
        sync.start();

        let last_seen = Arc::new(Mutex::new(None::<String>));
        let sink = Arc::clone(&last_seen);
        let _handle = sync.watch_document::<JoinPageContent>(move |page| {
            *sink.lock().unwrap() = Some(page.page_title.clone());
        });

        thread::scope(|scope| {
            for writer in 0..4 {
                let store = store.clone();
                scope.spawn(move || {
                    for write in 0..25 {
                        store
                            .set_whole(
                                "joinPage",
                                &json!({ "pageTitle": format!("{writer}-{write}") }),
                            )
                            .unwrap();
                    }
                });
            }
        });

        let snapshot = sync.document::<JoinPageContent>().page_title;
        assert_eq!(sync.revision(DocumentKey::JoinPage), 100);
        assert_eq!(
            last_seen.lock().unwrap().as_deref(),
            Some(snapshot.as_str()),
            "round {round}"
        );
    }
}

#[test]
fn listener_may_write_to_the_store_while_being_notified() {
    let store = sqlite_store();
    let sync = ContentSynchronizer::new(store.clone());
    sync.start();

    let echo_store = store.clone();
    let titles = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&titles);
    let _handle = sync.watch_document::<JoinPageContent>(move |page| {
        sink.lock().unwrap().push(page.page_title.clone());
        if page.page_title == "first" {
            echo_store
                .set_whole("joinPage", &json!({ "pageTitle": "second" }))
                .unwrap();
        }
    });

    store
        .set_whole("joinPage", &json!({ "pageTitle": "first" }))
        .unwrap();

    assert_eq!(*titles.lock().unwrap(), vec!["first", "second"]);
    assert_eq!(sync.document::<JoinPageContent>().page_title, "second");
}
