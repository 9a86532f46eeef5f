//! End-to-end search scenarios driven through the public event API.

use hackerstories::app::FetchRequest;
use hackerstories::storage::{JsonStorage, MemoryStorage, Storage};
use hackerstories::worker::{HackerStoriesWorker, WorkerResponse};
use hackerstories::{handle_event, initialize, Action, AppState, Config, Event};
use tempfile::TempDir;

fn hits_body(hits: &[(&str, &str, u64)], page: u32) -> Vec<u8> {
    let hits: Vec<_> = hits
        .iter()
        .map(|(id, title, comments)| {
            serde_json::json!({
                "objectID": id,
                "title": title,
                "url": format!("https://example.com/{id}"),
                "author": "pg",
                "num_comments": comments,
                "points": 10,
                "created_at_i": 0
            })
        })
        .collect();
    serde_json::to_vec(&serde_json::json!({ "hits": hits, "page": page, "nbPages": 50 })).unwrap()
}

fn start(state: &mut AppState) -> FetchRequest {
    let (render, actions) = handle_event(state, &Event::Start).unwrap();
    assert!(render);
    match actions.as_slice() {
        [Action::Fetch(request)] => request.clone(),
        other => panic!("expected a single fetch, got {other:?}"),
    }
}

fn finish(state: &mut AppState, request: &FetchRequest, status: u16, body: Vec<u8>) -> bool {
    let event = Event::FetchCompleted {
        request_id: request.request_id,
        page: request.page,
        status,
        body,
    };
    handle_event(state, &event).unwrap().0
}

fn titles(state: &AppState) -> Vec<String> {
    state
        .compute_viewmodel_at(40, 120, 0)
        .display_items
        .into_iter()
        .map(|item| item.title)
        .collect()
}

#[test]
fn first_fetch_shows_loading_then_results() {
    let mut state = initialize(&Config::default(), &MemoryStorage::default());

    let request = start(&mut state);
    assert_eq!(request.url, "https://hn.algolia.com/api/v1/search?query=React&page=0");

    let loading = state.compute_viewmodel_at(40, 120, 0);
    assert!(loading.loading);
    assert!(loading.display_items.is_empty());
    assert!(loading.empty_state.is_none());

    assert!(finish(&mut state, &request, 200, hits_body(&[("1", "React 19", 3), ("2", "Hooks", 4)], 0)));

    let loaded = state.compute_viewmodel_at(40, 120, 0);
    assert!(!loaded.loading);
    assert_eq!(loaded.error_message, None);
    assert_eq!(loaded.header.title, "My Hacker Stories with 7 comments");
    assert_eq!(titles(&state), vec!["React 19", "Hooks"]);
}

#[test]
fn dismissing_a_story_removes_only_that_story() {
    let mut state = initialize(&Config::default(), &MemoryStorage::default());
    let request = start(&mut state);
    finish(&mut state, &request, 200, hits_body(&[("1", "A", 0), ("2", "B", 0)], 0));

    let (render, actions) = handle_event(&mut state, &Event::DismissSelected).unwrap();

    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(titles(&state), vec!["B"]);
}

#[test]
fn failed_fetch_shows_error_and_keeps_recent_searches() {
    let mut state = initialize(&Config::default(), &MemoryStorage::default());
    let request = start(&mut state);

    finish(&mut state, &request, 503, b"upstream down".to_vec());

    let vm = state.compute_viewmodel_at(40, 120, 0);
    assert_eq!(vm.error_message.as_deref(), Some("Something went wrong ..."));
    assert!(vm.empty_state.is_some());
    assert_eq!(vm.recent_searches.len(), 1);
    assert_eq!(vm.recent_searches[0].term, "React");
}

#[test]
fn paging_then_new_search_then_reselect() {
    let mut state = initialize(&Config::default(), &MemoryStorage::default());
    let first = start(&mut state);
    finish(&mut state, &first, 200, hits_body(&[("1", "A", 1)], 0));

    let (_, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    let [Action::Fetch(more)] = actions.as_slice() else {
        panic!("expected a fetch for the next page");
    };
    finish(&mut state, more, 200, hits_body(&[("2", "B", 1)], 1));
    assert_eq!(titles(&state), vec!["A", "B"]);

    handle_event(&mut state, &Event::SearchMode).unwrap();
    for _ in 0.."React".len() {
        handle_event(&mut state, &Event::Backspace).unwrap();
    }
    for c in "rust".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }
    let (_, actions) = handle_event(&mut state, &Event::SubmitSearch).unwrap();
    let [Action::Fetch(search)] = actions.as_slice() else {
        panic!("expected a fetch for the new term");
    };
    finish(&mut state, search, 200, hits_body(&[("3", "Rust 2024", 9)], 0));
    assert_eq!(titles(&state), vec!["Rust 2024"]);

    let recent: Vec<_> = state
        .compute_viewmodel_at(40, 120, 0)
        .recent_searches
        .into_iter()
        .map(|r| (r.index, r.term))
        .collect();
    assert_eq!(recent, vec![(1, "React".to_string()), (2, "rust".to_string())]);

    let (_, actions) = handle_event(&mut state, &Event::ReselectRecent(1)).unwrap();
    let [Action::Fetch(again)] = actions.as_slice() else {
        panic!("expected a fetch for the reselected term");
    };
    assert_eq!(again.url, "https://hn.algolia.com/api/v1/search?query=React&page=0");
    assert_eq!(state.search_term.value(), "React");
}

#[test]
fn term_is_written_after_the_first_render_only_when_it_changes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hackerstories.json");
    {
        let mut store = JsonStorage::new(path.clone()).unwrap();
        store.set("search", "Redux").unwrap();
    }

    let mut state = initialize(&Config::default(), &JsonStorage::new(path.clone()).unwrap());
    assert_eq!(state.search_term.value(), "Redux");

    assert_eq!(handle_event(&mut state, &Event::Rendered).unwrap().1, vec![]);

    handle_event(&mut state, &Event::SearchMode).unwrap();
    handle_event(&mut state, &Event::Char('!')).unwrap();
    let (_, actions) = handle_event(&mut state, &Event::Rendered).unwrap();
    let [Action::PostToWorker(message)] = actions.as_slice() else {
        panic!("expected a persist message after the term changed");
    };

    let mut worker = HackerStoriesWorker::with_storage(Box::new(JsonStorage::new(path.clone()).unwrap()));
    assert_eq!(
        worker.handle_message(message.clone()),
        WorkerResponse::TermPersisted { key: "search".into() }
    );

    let reopened = initialize(&Config::default(), &JsonStorage::new(path).unwrap());
    assert_eq!(reopened.search_term.value(), "Redux!");
}
