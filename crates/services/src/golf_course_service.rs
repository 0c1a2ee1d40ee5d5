use crate::error::ServiceError;
use core_types::GolfCourse;
use database::GolfCourseRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct GolfCourseService {
    repository: Arc<dyn GolfCourseRepository>,
}

impl GolfCourseService {
    pub fn new(repository: Arc<dyn GolfCourseRepository>) -> Self {
        Self { repository }
    }

    /// Creates the course, or updates it when it carries the id of a stored one.
    pub async fn save_golf_course(
        &self,
        course: Option<GolfCourse>,
    ) -> Result<GolfCourse, ServiceError> {
        let Some(course) = course else {
            tracing::warn!("Rejected null golf course.");
            return Err(ServiceError::InvalidArgument(
                "Golf course cannot be null".to_string(),
            ));
        };
        let saved = self.repository.save(course).await?;
        tracing::info!(id = ?saved.id, name = ?saved.name, "Golf course saved.");
        Ok(saved)
    }

    pub async fn get_all_golf_courses(&self) -> Result<Vec<GolfCourse>, ServiceError> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<GolfCourse>, ServiceError> {
        Ok(self.repository.find_by_name(name).await?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<GolfCourse>, ServiceError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    pub async fn delete_golf_course(&self, id: i64) -> Result<(), ServiceError> {
        let Some(existing) = self.repository.find_by_id(id).await? else {
            return Err(ServiceError::NotFound(format!("golf course {id}")));
        };
        self.repository.delete(&existing).await?;
        tracing::info!(id, "Golf course deleted.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingGolfCourseRepository;

    #[tokio::test]
    async fn save_then_list() {
        let repo = Arc::new(RecordingGolfCourseRepository::new());
        let service = GolfCourseService::new(repo.clone());

        let saved = service
            .save_golf_course(Some(GolfCourse::new("Sunny Hills", "Mountain View")))
            .await
            .unwrap();
        assert!(saved.id.is_some());

        let all = service.get_all_golf_courses().await.unwrap();
        assert_eq!(all, vec![saved]);
        assert_eq!(repo.calls("save"), 1);
    }

    #[tokio::test]
    async fn null_course_is_rejected() {
        let repo = Arc::new(RecordingGolfCourseRepository::new());
        let service = GolfCourseService::new(repo.clone());

        assert!(matches!(
            service.save_golf_course(None).await,
            Err(ServiceError::InvalidArgument(_))
        ));
        assert_eq!(repo.calls("save"), 0);
    }

    #[tokio::test]
    async fn saving_with_id_updates_location() {
        let repo = Arc::new(RecordingGolfCourseRepository::new());
        let service = GolfCourseService::new(repo);

        let mut course = service
            .save_golf_course(Some(GolfCourse::new("Sunny Hills", "Mountain View")))
            .await
            .unwrap();
        course.location = Some("Ocean View".to_string());
        service.save_golf_course(Some(course)).await.unwrap();

        let found = service.find_by_name("Sunny Hills").await.unwrap().unwrap();
        assert_eq!(found.location(), Some("Ocean View"));
        assert_eq!(service.get_all_golf_courses().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_unknown_course_is_not_found() {
        let service = GolfCourseService::new(Arc::new(RecordingGolfCourseRepository::new()));
        assert!(matches!(
            service.delete_golf_course(3).await,
            Err(ServiceError::NotFound(_))
        ));
        assert_eq!(service.find_by_id(3).await.unwrap(), None);
    }
}
