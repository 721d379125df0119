use wanikani_client::{Request, Result};

use crate::body::{NewStudyMaterial, StudyMaterialRequest, StudyMaterialUpdate};
use crate::envelope::{Resource, ResourceSet};
use crate::filters::StudyMaterialFilters;
use crate::study_material::StudyMaterial;
use crate::types::Id;

impl super::WaniKaniClient {
    /// List study materials.
    pub fn study_materials(
        &self,
        filters: &StudyMaterialFilters,
    ) -> Request<ResourceSet<StudyMaterial>> {
        self.request(filters.apply(self.http.get("study_materials")))
    }

    /// Get study material by id.
    pub fn get_study_material(&self, id: Id) -> Request<Resource<StudyMaterial>> {
        self.get(format!("study_materials/{}", id))
    }

    /// Create study material for a subject. A subject can only have one.
    pub fn create_study_material(
        &self,
        material: &NewStudyMaterial,
    ) -> Result<Request<Resource<StudyMaterial>>> {
        let body = StudyMaterialRequest {
            study_material: material,
        };
        let builder = self.http.post("study_materials").json(&body)?;
        Ok(self.request(builder))
    }

    /// Update study material. Fields left as `None` are not changed.
    pub fn update_study_material(
        &self,
        id: Id,
        update: &StudyMaterialUpdate,
    ) -> Result<Request<Resource<StudyMaterial>>> {
        let body = StudyMaterialRequest {
            study_material: update,
        };
        let builder = self
            .http
            .put(format!("study_materials/{}", id))
            .json(&body)?;
        Ok(self.request(builder))
    }
}
