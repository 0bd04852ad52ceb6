pub(crate) const UNSELECTED_TITLE: &str = "未選択";
pub(crate) const UNSELECTED_AUTHOR: &str = "ファイルをアップロードしてください";

pub(crate) const COVER_WIDTH_PX: f32 = 180.0;
pub(crate) const COVER_HEIGHT_PX: f32 = 256.0;
pub(crate) const SCREEN_PADDING_PX: u16 = 24;
pub(crate) const SECTION_SPACING_PX: f32 = 16.0;
