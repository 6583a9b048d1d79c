//! Project and tag operations for the TaskManager.

use log::info;

use super::TaskManager;
use crate::{
    display::{Projects, Tags},
    error::Result,
    models::{Project, Tag},
    params::{CreateProject, CreateTag, Id},
};

impl TaskManager {
    /// Creates a project with a unique name.
    pub async fn create_project(&self, params: &CreateProject) -> Result<Project> {
        let name = params.name.clone();
        let project = self.with_db(move |db| db.create_project(&name)).await?;
        info!("Created project {} '{}'", project.id, project.name);
        Ok(project)
    }

    pub async fn get_project(&self, params: &Id) -> Result<Option<Project>> {
        let id = params.id;
        self.with_db(move |db| db.get_project(id)).await
    }

    pub async fn list_projects(&self) -> Result<Projects> {
        let projects = self.with_db(|db| db.list_projects()).await?;
        Ok(Projects(projects))
    }

    /// Deletes a project, returning it, or `None` if it did not exist.
    /// Its tasks are kept and lose their project.
    pub async fn delete_project(&self, params: &Id) -> Result<Option<Project>> {
        let id = params.id;
        self.with_db(move |db| {
            let project = db.get_project(id)?;
            if project.is_some() {
                db.delete_project(id)?;
                info!("Deleted project {id}");
            }
            Ok(project)
        })
        .await
    }

    /// Creates a tag with a unique name.
    pub async fn create_tag(&self, params: &CreateTag) -> Result<Tag> {
        let name = params.name.clone();
        let tag = self.with_db(move |db| db.create_tag(&name)).await?;
        info!("Created tag {} '{}'", tag.id, tag.name);
        Ok(tag)
    }

    pub async fn get_tag(&self, params: &Id) -> Result<Option<Tag>> {
        let id = params.id;
        self.with_db(move |db| db.get_tag(id)).await
    }

    pub async fn list_tags(&self) -> Result<Tags> {
        let tags = self.with_db(|db| db.list_tags()).await?;
        Ok(Tags(tags))
    }

    /// Deletes a tag and detaches it from all tasks.
    pub async fn delete_tag(&self, params: &Id) -> Result<Option<Tag>> {
        let id = params.id;
        self.with_db(move |db| {
            let tag = db.get_tag(id)?;
            if tag.is_some() {
                db.delete_tag(id)?;
                info!("Deleted tag {id}");
            }
            Ok(tag)
        })
        .await
    }
}
