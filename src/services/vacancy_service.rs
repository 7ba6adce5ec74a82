use std::sync::Arc;

use crate::dto::file_dto::FileDto;
use crate::error::Result;
use crate::models::vacancy::Vacancy;
use crate::repository::memory::MemoryStore;
use crate::services::file_service::FileService;

/// CRUD over vacancies plus the attachment lifecycle: a vacancy's blob is
/// stored before the entity referencing it, and is deleted whenever it is
/// replaced or its owner goes away.
#[derive(Clone)]
pub struct VacancyService {
    vacancies: Arc<MemoryStore<Vacancy>>,
    file_service: FileService,
}

impl VacancyService {
    pub fn new(vacancies: Arc<MemoryStore<Vacancy>>, file_service: FileService) -> Self {
        Self {
            vacancies,
            file_service,
        }
    }

    pub async fn save(&self, mut vacancy: Vacancy, upload: Option<FileDto>) -> Result<Vacancy> {
        if let Some(upload) = upload {
            let stored = self.file_service.save(upload).await?;
            vacancy.file_id = Some(stored.id);
        }
        Ok(self.vacancies.save(vacancy))
    }

    /// Updates the stored vacancy, keeping its original creation date and,
    /// when no new upload arrives, its current attachment. Returns `false`
    /// for an unknown id.
    pub async fn update(&self, mut vacancy: Vacancy, upload: Option<FileDto>) -> Result<bool> {
        let Some(existing) = self.vacancies.find_by_id(vacancy.id) else {
            return Ok(false);
        };
        let previous_file = existing.file_id;
        vacancy.creation_date = existing.creation_date;
        vacancy.file_id = match upload {
            Some(upload) => Some(self.file_service.save(upload).await?.id),
            None => previous_file,
        };

        let updated = self.vacancies.update(vacancy.clone());
        if updated {
            if vacancy.file_id != previous_file {
                if let Some(old_id) = previous_file {
                    self.file_service.delete_by_id(old_id).await;
                }
            }
        } else if vacancy.file_id != previous_file {
            // The vacancy vanished between lookup and update; take the
            // freshly stored blob back out instead of leaking it.
            if let Some(new_id) = vacancy.file_id {
                self.file_service.delete_by_id(new_id).await;
            }
        }
        Ok(updated)
    }

    pub async fn delete_by_id(&self, id: i32) -> bool {
        let Some(existing) = self.vacancies.find_by_id(id) else {
            return false;
        };
        let deleted = self.vacancies.delete_by_id(id);
        if deleted {
            if let Some(file_id) = existing.file_id {
                self.file_service.delete_by_id(file_id).await;
            }
        }
        deleted
    }

    pub async fn find_by_id(&self, id: i32) -> Option<Vacancy> {
        self.vacancies.find_by_id(id)
    }

    pub async fn find_all(&self) -> Vec<Vacancy> {
        self.vacancies.find_all()
    }

    pub async fn find_visible(&self) -> Vec<Vacancy> {
        let mut items = self.vacancies.find_all();
        items.retain(|vacancy| vacancy.visible);
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::file_store::FileStore;
    use bytes::Bytes;
    use chrono::Utc;

    fn service() -> (VacancyService, Arc<FileStore>) {
        let files = Arc::new(FileStore::new());
        let service = VacancyService::new(
            Arc::new(MemoryStore::new()),
            FileService::new(files.clone()),
        );
        (service, files)
    }

    fn vacancy(title: &str) -> Vacancy {
        Vacancy {
            id: 0,
            title: title.to_string(),
            description: "Backend role".to_string(),
            creation_date: Utc::now(),
            visible: true,
            city_id: 1,
            file_id: None,
        }
    }

    fn upload(name: &str, bytes: &'static [u8]) -> FileDto {
        FileDto::new(name, Bytes::from_static(bytes))
    }

    #[tokio::test]
    async fn save_with_attachment_assigns_a_file_reference() {
        let (service, files) = service();
        let saved = service
            .save(vacancy("Junior"), Some(upload("logo.png", b"png")))
            .await
            .unwrap();

        let file_id = saved.file_id.expect("attachment reference");
        assert_eq!(files.find_by_id(file_id).unwrap().name, "logo.png");
    }

    #[tokio::test]
    async fn replacing_an_attachment_deletes_the_previous_blob() {
        let (service, files) = service();
        let saved = service
            .save(vacancy("Middle"), Some(upload("old.png", b"old")))
            .await
            .unwrap();
        let old_id = saved.file_id.unwrap();

        let updated = service
            .update(saved.clone(), Some(upload("new.png", b"new")))
            .await
            .unwrap();

        assert!(updated);
        assert!(files.find_by_id(old_id).is_none());
        let current = service.find_by_id(saved.id).await.unwrap();
        assert_eq!(files.find_by_id(current.file_id.unwrap()).unwrap().name, "new.png");
        assert_eq!(files.len(), 1);
    }

    #[tokio::test]
    async fn update_without_upload_keeps_the_attachment() {
        let (service, files) = service();
        let saved = service
            .save(vacancy("Senior"), Some(upload("keep.png", b"keep")))
            .await
            .unwrap();

        let mut edited = saved.clone();
        edited.description = "Senior backend role".to_string();
        assert!(service.update(edited, None).await.unwrap());

        let current = service.find_by_id(saved.id).await.unwrap();
        assert_eq!(current.file_id, saved.file_id);
        assert_eq!(files.len(), 1);
    }

    #[tokio::test]
    async fn update_unknown_id_returns_false_without_leaking_the_upload() {
        let (service, files) = service();
        let mut ghost = vacancy("Ghost");
        ghost.id = 99;

        let updated = service
            .update(ghost, Some(upload("orphan.png", b"orphan")))
            .await
            .unwrap();

        assert!(!updated);
        assert_eq!(files.len(), 0);
    }

    #[tokio::test]
    async fn update_preserves_the_original_creation_date() {
        let (service, _files) = service();
        let saved = service.save(vacancy("Intern"), None).await.unwrap();

        let mut edited = saved.clone();
        edited.creation_date = Utc::now();
        edited.title = "Intern+".to_string();
        assert!(service.update(edited, None).await.unwrap());

        let current = service.find_by_id(saved.id).await.unwrap();
        assert_eq!(current.creation_date, saved.creation_date);
        assert_eq!(current.title, "Intern+");
    }

    #[tokio::test]
    async fn deleting_a_vacancy_deletes_its_attachment() {
        let (service, files) = service();
        let saved = service
            .save(vacancy("Lead"), Some(upload("cv.pdf", b"%PDF")))
            .await
            .unwrap();

        assert!(service.delete_by_id(saved.id).await);
        assert!(service.find_by_id(saved.id).await.is_none());
        assert_eq!(files.len(), 0);
        assert!(!service.delete_by_id(saved.id).await);
    }

    #[tokio::test]
    async fn find_visible_filters_out_hidden_vacancies() {
        let (service, _files) = service();
        service.save(vacancy("Visible"), None).await.unwrap();
        let mut hidden = vacancy("Hidden");
        hidden.visible = false;
        service.save(hidden, None).await.unwrap();

        assert_eq!(service.find_all().await.len(), 2);
        let visible = service.find_visible().await;
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Visible");
    }
}
