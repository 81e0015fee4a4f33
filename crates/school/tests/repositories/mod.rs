mod organization_repository_it;
mod person_repository_it;
mod school_repository_it;
