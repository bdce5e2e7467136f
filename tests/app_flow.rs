//! Application flow tests - fetch lifecycle, navigation, and panel state

use apix::theme::Theme;
use apix::{App, AppEvent, FetchRequest, InputMode, ListPhase, Route, SpecSummary};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

fn test_app() -> (App, UnboundedReceiver<FetchRequest>) {
    let (tx, rx) = unbounded_channel();
    (App::new(30, vec![20, 30, 60], Theme::default(), Some(tx)), rx)
}

/// App on the home screen with the given provider list already loaded.
fn ready_app(ids: &[&str]) -> (App, UnboundedReceiver<FetchRequest>) {
    let (mut app, mut rx) = test_app();
    app.apply_route(&Route::Home);
    let _ = rx.try_recv(); // drain the providers request
    app.on_event(AppEvent::ProvidersLoaded(
        ids.iter().map(|s| s.to_string()).collect(),
    ));
    (app, rx)
}

fn summary(version: &str, title: &str, description: &str) -> SpecSummary {
    SpecSummary {
        version: version.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

#[test]
fn mounting_home_requests_providers_once() {
    let (mut app, mut rx) = test_app();
    app.apply_route(&Route::Home);

    assert_eq!(app.list_phase(), ListPhase::Loading);
    assert_eq!(rx.try_recv().ok(), Some(FetchRequest::Providers));
    assert!(rx.try_recv().is_err(), "one request per mount");
}

#[test]
fn loaded_providers_move_the_list_to_ready() {
    let (app, _rx) = ready_app(&["1forge.com", "adyen.com"]);

    assert_eq!(app.list_phase(), ListPhase::Ready);
    assert_eq!(app.providers_len(), 2);
}

#[test]
fn failed_providers_fetch_lands_on_empty_not_loading() {
    // The worker reports a failed fetch as an empty list
    let (app, _rx) = ready_app(&[]);

    assert_eq!(app.list_phase(), ListPhase::Empty);
}

#[test]
fn stale_providers_response_is_dropped() {
    let (mut app, _rx) = ready_app(&["1forge.com", "adyen.com"]);

    // No request outstanding; a late duplicate must not clobber the list
    app.on_event(AppEvent::ProvidersLoaded(vec!["late.example".to_string()]));

    assert_eq!(app.providers_len(), 2);
    assert_eq!(app.list_phase(), ListPhase::Ready);
}

#[test]
fn reloading_providers_replaces_the_previous_list() {
    let (mut app, mut rx) = ready_app(&["1forge.com", "adyen.com"]);

    // A remount fetches again; the new result overwrites the old list
    // instead of extending it
    app.go_home();
    let _ = rx.try_recv();
    app.on_event(AppEvent::ProvidersLoaded(vec![
        "ably.io".to_string(),
        "apis.guru".to_string(),
    ]));

    assert_eq!(app.providers_len(), 2);
    assert_eq!(
        app.filtered_providers(),
        vec!["ably.io".to_string(), "apis.guru".to_string()]
    );
}

#[test]
fn show_providers_button_waits_for_a_ready_list() {
    let (mut app, mut rx) = test_app();
    app.apply_route(&Route::Home);

    app.press_show_providers();
    assert!(!app.panel_open(), "inert while the list is loading");

    app.on_event(AppEvent::ProvidersLoaded(Vec::new()));
    app.press_show_providers();
    assert!(!app.panel_open(), "inert when the list is empty");

    let _ = rx.try_recv();
    app.go_home();
    let _ = rx.try_recv();
    app.on_event(AppEvent::ProvidersLoaded(vec![
        "1forge.com".to_string(),
        "adyen.com".to_string(),
    ]));
    app.press_show_providers();
    assert!(app.panel_open());

    // Pressing again while open is a no-op and keeps the selection
    app.panel_down();
    app.press_show_providers();
    assert!(app.panel_open());
    assert_eq!(app.panel_selection(), 1);
}

#[test]
fn activating_a_provider_requests_its_spec() {
    let (mut app, mut rx) = ready_app(&["1forge.com", "adyen.com"]);
    app.press_show_providers();
    app.panel_down();
    app.activate_selected();

    assert_eq!(
        app.route(),
        &Route::ApiDetails {
            provider: "adyen.com".to_string()
        }
    );
    assert_eq!(app.loading_spec(), Some("adyen.com"));
    assert_eq!(
        rx.try_recv().ok(),
        Some(FetchRequest::Spec {
            provider: "adyen.com".to_string()
        })
    );
    assert!(rx.try_recv().is_err(), "one spec request per visit");
}

#[test]
fn loaded_summary_blocks_refetching() {
    let (mut app, mut rx) = ready_app(&["1forge.com", "adyen.com"]);
    app.open_details("adyen.com".to_string());
    let _ = rx.try_recv();
    app.on_event(AppEvent::SpecLoaded {
        provider: "adyen.com".to_string(),
        summary: Some(summary("2.0", "Adyen Checkout API", "Payments.")),
    });

    // The guard only checks that a summary exists, not whose it is
    app.open_details("1forge.com".to_string());
    assert!(rx.try_recv().is_err(), "no refetch while a summary is held");
    assert_eq!(
        app.spec().map(|s| s.title.as_str()),
        Some("Adyen Checkout API")
    );
}

#[test]
fn going_home_drops_details_state_and_refetches() {
    let (mut app, mut rx) = ready_app(&["adyen.com"]);
    app.open_details("adyen.com".to_string());
    let _ = rx.try_recv();
    app.on_event(AppEvent::SpecLoaded {
        provider: "adyen.com".to_string(),
        summary: Some(summary("2.0", "Adyen Checkout API", "Payments.")),
    });

    app.go_home();

    assert_eq!(app.route(), &Route::Home);
    assert!(app.spec().is_none());
    assert!(app.loading_spec().is_none());
    assert!(!app.panel_open());
    assert_eq!(app.list_phase(), ListPhase::Loading);
    assert_eq!(rx.try_recv().ok(), Some(FetchRequest::Providers));
}

#[test]
fn spec_arriving_after_leaving_details_is_dropped() {
    let (mut app, mut rx) = ready_app(&["adyen.com"]);
    app.open_details("adyen.com".to_string());
    app.go_home();
    while rx.try_recv().is_ok() {}

    app.on_event(AppEvent::SpecLoaded {
        provider: "adyen.com".to_string(),
        summary: Some(summary("2.0", "Adyen Checkout API", "Payments.")),
    });

    assert!(app.spec().is_none(), "stale summary must not resurface");
}

#[test]
fn failed_spec_fetch_clears_the_inflight_marker() {
    let (mut app, _rx) = ready_app(&["adyen.com"]);
    app.open_details("adyen.com".to_string());

    app.on_event(AppEvent::SpecLoaded {
        provider: "adyen.com".to_string(),
        summary: None,
    });

    // The screen keeps its loading display; Esc is the way out
    assert!(app.spec().is_none());
    assert!(app.loading_spec().is_none());
    assert_eq!(
        app.route(),
        &Route::ApiDetails {
            provider: "adyen.com".to_string()
        }
    );
}

#[test]
fn deep_link_lands_directly_on_details() {
    let (mut app, mut rx) = test_app();
    app.apply_route(&Route::ApiDetails {
        provider: "adyen.com".to_string(),
    });

    assert_eq!(
        rx.try_recv().ok(),
        Some(FetchRequest::Spec {
            provider: "adyen.com".to_string()
        })
    );
    assert!(
        rx.try_recv().is_err(),
        "providers are only fetched on the home screen"
    );
}

#[test]
fn filter_narrows_the_panel_and_clamps_selection() {
    let (mut app, _rx) = ready_app(&["1forge.com", "adyen.com", "apache.org"]);
    app.press_show_providers();
    app.panel_down();
    app.panel_down();
    assert_eq!(app.panel_selection(), 2);

    app.start_filter();
    assert_eq!(app.input_mode(), InputMode::Filter);
    app.filter_add_char('a');
    app.filter_add_char('d');

    assert_eq!(app.filtered_providers(), vec!["adyen.com".to_string()]);
    assert_eq!(
        app.panel_selection(),
        0,
        "selection clamped into the narrowed list"
    );

    app.apply_filter();
    assert_eq!(app.input_mode(), InputMode::Normal);
    assert!(
        app.filter_expanded(),
        "bar stays visible while the query is non-empty"
    );

    app.activate_selected();
    assert_eq!(
        app.route(),
        &Route::ApiDetails {
            provider: "adyen.com".to_string()
        }
    );
}

#[test]
fn filter_matches_case_insensitively() {
    let (mut app, _rx) = ready_app(&["Azure.COM", "adyen.com"]);
    app.press_show_providers();
    app.start_filter();
    app.filter_add_char('a');
    app.filter_add_char('z');

    assert_eq!(app.filtered_providers(), vec!["Azure.COM".to_string()]);
}

#[test]
fn clearing_the_filter_restores_the_full_list() {
    let (mut app, _rx) = ready_app(&["1forge.com", "adyen.com", "apache.org"]);
    app.press_show_providers();
    app.start_filter();
    app.filter_add_char('z');
    assert!(app.filtered_providers().is_empty());

    app.clear_filter();
    assert_eq!(app.filtered_providers().len(), 3);
    assert_eq!(app.filter_query(), "");
    assert_eq!(app.input_mode(), InputMode::Normal);
}

#[test]
fn closing_the_panel_resets_the_filter() {
    let (mut app, _rx) = ready_app(&["1forge.com", "adyen.com"]);
    app.press_show_providers();
    app.start_filter();
    app.filter_add_char('a');

    app.close_panel();

    assert!(!app.panel_open());
    assert_eq!(app.filter_query(), "");
    assert!(!app.filter_expanded());
}

#[test]
fn panel_selection_stays_in_bounds() {
    let (mut app, _rx) = ready_app(&["1forge.com", "adyen.com"]);
    app.press_show_providers();

    app.panel_up();
    assert_eq!(app.panel_selection(), 0);

    app.panel_down();
    app.panel_down();
    app.panel_down();
    assert_eq!(app.panel_selection(), 1, "clamped at the last row");
}

#[test]
fn details_scroll_clamps_to_content() {
    let (mut app, _rx) = ready_app(&["adyen.com"]);
    app.open_details("adyen.com".to_string());
    app.on_event(AppEvent::SpecLoaded {
        provider: "adyen.com".to_string(),
        summary: Some(summary("2.0", "Adyen Checkout API", &"line\n".repeat(30))),
    });
    app.set_details_viewport_height(10);

    app.scroll_details_by(5);
    assert_eq!(app.details_scroll(), 5);

    app.scroll_details_by(100);
    assert_eq!(app.details_scroll(), 20, "30 lines minus a 10 line viewport");

    app.scroll_details_by(-100);
    assert_eq!(app.details_scroll(), 0);

    app.scroll_details_end();
    assert_eq!(app.details_scroll(), 20);
    app.scroll_details_home();
    assert_eq!(app.details_scroll(), 0);
}

#[test]
fn oversized_description_saturates_the_scroll_bound() {
    let (mut app, _rx) = ready_app(&["adyen.com"]);
    app.open_details("adyen.com".to_string());
    app.on_event(AppEvent::SpecLoaded {
        provider: "adyen.com".to_string(),
        summary: Some(summary("2.0", "Adyen Checkout API", &"line\n".repeat(70_000))),
    });
    app.set_details_viewport_height(10);

    // A line count past u16::MAX pins End at the top of the range
    // instead of wrapping to a small offset
    app.scroll_details_end();
    assert_eq!(app.details_scroll(), u16::MAX - 10);
}

#[test]
fn spinner_only_advances_while_a_fetch_is_outstanding() {
    let (mut app, _rx) = ready_app(&["1forge.com"]);

    let idle = app.spinner_char();
    app.tick_spinner();
    assert_eq!(app.spinner_char(), idle, "frozen when nothing is in flight");

    app.go_home();
    app.tick_spinner();
    assert_ne!(app.spinner_char(), idle);
}

#[test]
fn fps_cycles_through_choices_and_wraps() {
    let (mut app, _rx) = test_app();
    assert_eq!(app.fps(), 30);

    app.cycle_fps();
    assert_eq!(app.fps(), 60);
    app.cycle_fps();
    assert_eq!(app.fps(), 20);
    app.cycle_fps();
    assert_eq!(app.fps(), 30);
}

#[test]
fn quit_event_sets_the_flag() {
    let (mut app, _rx) = test_app();
    assert!(!app.quit_flag());

    app.on_event(AppEvent::Quit);
    assert!(app.quit_flag());
}
