// Acceptance scenarios for golf course management.
//
// Each scenario is written as given/when/then steps on a `World` that calls
// the controller functions directly with services over in-memory storage.
// No HTTP framing is involved; see `wire.rs` for a test over a real socket.

use axum::{
    extract::{Query, State},
    Json,
};
use configuration::ValidationSettings;
use core_types::GolfCourse;
use std::sync::Arc;
use web_server::handlers::{golf_courses, NameQuery};
use web_server::AppState;

struct World {
    state: Arc<AppState>,
    course: Option<GolfCourse>,
    listed: Vec<GolfCourse>,
}

impl World {
    // Background: the user is logged in as an administrator. There is no
    // authentication layer, so the background amounts to a fresh system.
    fn given_a_logged_in_administrator() -> Self {
        Self {
            state: Arc::new(AppState::in_memory(&ValidationSettings::default())),
            course: None,
            listed: Vec::new(),
        }
    }

    async fn create_course(&mut self, name: &str, location: &str) -> GolfCourse {
        let Json(saved) = golf_courses::add_golf_course(
            State(self.state.clone()),
            Ok(Json(Some(GolfCourse::new(name, location)))),
        )
        .await
        .unwrap();
        saved
    }

    async fn when_the_user_creates_a_course_with_valid_attributes(&mut self) {
        let saved = self.create_course("Sunny Hills", "Mountain View").await;
        assert_eq!(saved.name(), Some("Sunny Hills"));
        assert_eq!(saved.location(), Some("Mountain View"));
        self.course = Some(saved);
    }

    async fn given_a_golf_course_exists(&mut self) {
        let saved = self.create_course("Sunny Hills", "Mountain View").await;
        self.course = Some(saved);
    }

    async fn when_the_administrator_modifies_the_location(&mut self, location: &str) {
        let mut course = self.course.take().expect("a course exists");
        course.location = Some(location.to_string());
        let Json(saved) =
            golf_courses::add_golf_course(State(self.state.clone()), Ok(Json(Some(course))))
                .await
                .unwrap();
        self.course = Some(saved);
    }

    async fn when_the_administrator_views_all_courses(&mut self) {
        let Json(all) = golf_courses::get_all_golf_courses(State(self.state.clone()))
            .await
            .unwrap();
        self.listed = all;
    }

    fn then_the_course_is_saved(&self) {
        let course = self.course.as_ref().expect("a course was created");
        assert!(course.id.is_some());
    }

    async fn then_it_is_visible_in_the_list(&mut self, name: &str) {
        self.when_the_administrator_views_all_courses().await;
        assert!(self.listed.iter().any(|c| c.name() == Some(name)));
    }

    async fn then_viewing_the_course_shows(&self, name: &str, location: &str) {
        let Json(found) = golf_courses::find_by_name(
            State(self.state.clone()),
            Ok(Query(NameQuery {
                name: Some(name.to_string()),
            })),
        )
        .await
        .unwrap();
        assert_eq!(found.location(), Some(location));
    }
}

#[tokio::test]
async fn scenario_create_a_new_golf_course() {
    let mut world = World::given_a_logged_in_administrator();

    world.when_the_user_creates_a_course_with_valid_attributes().await;

    world.then_the_course_is_saved();
    world.then_it_is_visible_in_the_list("Sunny Hills").await;
}

#[tokio::test]
async fn scenario_modify_golf_course_details() {
    let mut world = World::given_a_logged_in_administrator();
    world.given_a_golf_course_exists().await;

    world.when_the_administrator_modifies_the_location("Ocean View").await;

    assert_eq!(world.course.as_ref().and_then(|c| c.location()), Some("Ocean View"));
    world.then_viewing_the_course_shows("Sunny Hills", "Ocean View").await;
    world.when_the_administrator_views_all_courses().await;
    assert_eq!(world.listed.len(), 1);
    assert_eq!(world.listed[0].location(), Some("Ocean View"));
}

#[tokio::test]
async fn scenario_view_list_of_all_golf_courses() {
    let mut world = World::given_a_logged_in_administrator();
    world.given_a_golf_course_exists().await;
    world.create_course("Green Valley", "Lake Side").await;

    world.when_the_administrator_views_all_courses().await;

    let names: Vec<_> = world.listed.iter().filter_map(|c| c.name()).collect();
    assert_eq!(names, vec!["Sunny Hills", "Green Valley"]);
}
