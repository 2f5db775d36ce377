pub mod clean_video_use_case;
pub mod inspect_regions_use_case;
