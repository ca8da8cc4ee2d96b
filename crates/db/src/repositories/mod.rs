//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod circuit_song_repo;
pub mod circuit_training_repo;
pub mod club_repo;
pub mod equipment_item_repo;
pub mod event_participation_repo;
pub mod event_photo_repo;
pub mod event_reaction_repo;
pub mod event_repo;
pub mod fencer_profile_repo;
pub mod glossary_term_repo;
pub mod guide_video_repo;
pub mod payment_status_repo;
pub mod photo_album_repo;
pub mod photo_like_repo;
pub mod role_repo;
pub mod rules_document_repo;
pub mod session_repo;
pub mod sub_album_repo;
pub mod training_note_repo;
pub mod user_equipment_repo;
pub mod user_repo;

pub use circuit_song_repo::CircuitSongRepo;
pub use circuit_training_repo::CircuitTrainingRepo;
pub use club_repo::ClubRepo;
pub use equipment_item_repo::EquipmentItemRepo;
pub use event_participation_repo::EventParticipationRepo;
pub use event_photo_repo::EventPhotoRepo;
pub use event_reaction_repo::EventReactionRepo;
pub use event_repo::EventRepo;
pub use fencer_profile_repo::FencerProfileRepo;
pub use glossary_term_repo::GlossaryTermRepo;
pub use guide_video_repo::GuideVideoRepo;
pub use payment_status_repo::PaymentStatusRepo;
pub use photo_album_repo::PhotoAlbumRepo;
pub use photo_like_repo::PhotoLikeRepo;
pub use role_repo::RoleRepo;
pub use rules_document_repo::RulesDocumentRepo;
pub use session_repo::SessionRepo;
pub use sub_album_repo::SubAlbumRepo;
pub use training_note_repo::TrainingNoteRepo;
pub use user_equipment_repo::UserEquipmentRepo;
pub use user_repo::UserRepo;
