// DOM hooks used by the sphere and its detail modal.

pub const SPHERE_CONTAINER_ID: &str = "testimonials-sphere";

pub const NODE_CLASS: &str = "sphere-image";
pub const NODE_SELECTOR: &str = ".sphere-image";
pub const NODE_WRAPPER_CLASS: &str = "sphere-image-wrapper";
pub const NODE_INDEX_ATTR: &str = "data-testimonial-index";

pub const MODAL_ID: &str = "testimonial-modal";
pub const MODAL_CLOSE_ID: &str = "testimonial-modal-close";
pub const MODAL_OVERLAY_CLASS: &str = "testimonial-modal-overlay";
pub const MODAL_ACTIVE_CLASS: &str = "active";
pub const MODAL_IMAGE_ID: &str = "modal-image";
pub const MODAL_TEXT_ID: &str = "modal-text";
pub const MODAL_AUTHOR_NAME_ID: &str = "modal-author-name";
pub const MODAL_AUTHOR_TITLE_ID: &str = "modal-author-title";
pub const MODAL_DIVISION_ID: &str = "modal-division";
