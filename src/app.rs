use crate::config::Config;
use crate::data;
use crate::error::Result;
use crate::logic::{
    filter_crops, filter_fertilizers, filter_pesticides, AdvisoryEngine, CropFilter,
    FertilizerFilter, ForumStore, PesticideFilter,
};
use crate::logic::rules::recommended_crops;
use crate::models::{
    Advisory, Crop, Fertilizer, ForumPost, Pesticide, PostCategory, Season, WeatherSnapshot,
};
use crate::storage::Repository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    CropGuide,
    Weather,
    Recommendations,
    Forum,
}

impl Screen {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Screen::Home),
            '2' => Some(Screen::CropGuide),
            '3' => Some(Screen::Weather),
            '4' => Some(Screen::Recommendations),
            '5' => Some(Screen::Forum),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropGuideFocus {
    Search,
    Season,
    Soil,
    List,
}

impl CropGuideFocus {
    pub fn next(&self) -> Self {
        match self {
            CropGuideFocus::Search => CropGuideFocus::Season,
            CropGuideFocus::Season => CropGuideFocus::Soil,
            CropGuideFocus::Soil => CropGuideFocus::List,
            CropGuideFocus::List => CropGuideFocus::Search,
        }
    }
}

pub struct CropGuideState {
    pub query: String,
    /// 0 is the "All" sentinel, then `Season::all()` offset by one.
    pub season_index: usize,
    /// 0 is the "All" sentinel, then `data::SOIL_TYPES` offset by one.
    pub soil_index: usize,
    pub selected_index: usize,
    pub focus: CropGuideFocus,
}

impl CropGuideState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            season_index: 0,
            soil_index: 0,
            selected_index: 0,
            focus: CropGuideFocus::Search,
        }
    }

    pub fn season(&self) -> Option<Season> {
        self.season_index
            .checked_sub(1)
            .and_then(|i| Season::all().get(i).copied())
    }

    pub fn soil(&self) -> Option<&'static str> {
        self.soil_index
            .checked_sub(1)
            .and_then(|i| data::SOIL_TYPES.get(i).copied())
    }

    pub fn cycle_season(&mut self, forward: bool) {
        let len = Season::all().len() + 1;
        self.season_index = cycle(self.season_index, len, forward);
        self.selected_index = 0;
    }

    pub fn cycle_soil(&mut self, forward: bool) {
        let len = data::SOIL_TYPES.len() + 1;
        self.soil_index = cycle(self.soil_index, len, forward);
        self.selected_index = 0;
    }

    pub fn filter(&self) -> CropFilter {
        CropFilter {
            query: self.query.clone(),
            season: self.season(),
            soil: self.soil().map(str::to_string),
        }
    }
}

pub struct WeatherState {
    pub input: String,
    pub loading: bool,
    pub snapshot: Option<WeatherSnapshot>,
    pub error: Option<String>,
    pending_city: Option<String>,
}

impl WeatherState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            loading: false,
            snapshot: None,
            error: None,
            pending_city: None,
        }
    }

    /// Queue a lookup. The event loop picks it up via `take_pending_city`.
    pub fn request_lookup(&mut self, city: &str) {
        let city = city.trim();
        if city.is_empty() {
            return;
        }
        self.pending_city = Some(city.to_string());
        self.loading = true;
    }

    pub fn take_pending_city(&mut self) -> Option<String> {
        self.pending_city.take()
    }

    /// Fold a lookup result into the state. On failure the prior snapshot is
    /// cleared; `error` and `snapshot` are never both present.
    pub fn apply_result(&mut self, result: Result<WeatherSnapshot>) {
        self.loading = false;
        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("weather lookup failed: {}", e);
                self.snapshot = None;
                self.error = Some(
                    "Unable to fetch weather data. Please check the city name and try again."
                        .to_string(),
                );
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecTab {
    Fertilizers,
    Pesticides,
}

impl RecTab {
    pub fn toggle(&self) -> Self {
        match self {
            RecTab::Fertilizers => RecTab::Pesticides,
            RecTab::Pesticides => RecTab::Fertilizers,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecTab::Fertilizers => "Fertilizers",
            RecTab::Pesticides => "Pesticides",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecFocus {
    Search,
    Crop,
    List,
}

impl RecFocus {
    pub fn next(&self) -> Self {
        match self {
            RecFocus::Search => RecFocus::Crop,
            RecFocus::Crop => RecFocus::List,
            RecFocus::List => RecFocus::Search,
        }
    }
}

pub struct RecommendationsState {
    pub tab: RecTab,
    pub query: String,
    /// 0 is the "All" sentinel, then `data::CROP_OPTIONS` offset by one.
    pub crop_index: usize,
    pub selected_index: usize,
    pub focus: RecFocus,
}

impl RecommendationsState {
    pub fn new() -> Self {
        Self {
            tab: RecTab::Fertilizers,
            query: String::new(),
            crop_index: 0,
            selected_index: 0,
            focus: RecFocus::Search,
        }
    }

    pub fn crop(&self) -> Option<&'static str> {
        self.crop_index
            .checked_sub(1)
            .and_then(|i| data::CROP_OPTIONS.get(i).copied())
    }

    pub fn cycle_crop(&mut self, forward: bool) {
        let len = data::CROP_OPTIONS.len() + 1;
        self.crop_index = cycle(self.crop_index, len, forward);
        self.selected_index = 0;
    }

    pub fn toggle_tab(&mut self) {
        self.tab = self.tab.toggle();
        self.selected_index = 0;
    }

    pub fn fertilizer_filter(&self) -> FertilizerFilter {
        FertilizerFilter {
            query: self.query.clone(),
            crop: self.crop().map(str::to_string),
        }
    }

    pub fn pesticide_filter(&self) -> PesticideFilter {
        PesticideFilter {
            query: self.query.clone(),
            crop: self.crop().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerField {
    Author,
    Category,
    Title,
    Content,
}

impl ComposerField {
    pub fn next(&self) -> Self {
        match self {
            ComposerField::Author => ComposerField::Category,
            ComposerField::Category => ComposerField::Title,
            ComposerField::Title => ComposerField::Content,
            ComposerField::Content => ComposerField::Author,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComposerField::Author => "Your Name",
            ComposerField::Category => "Category",
            ComposerField::Title => "Title",
            ComposerField::Content => "Content",
        }
    }
}

/// Form state for authoring a new forum post.
pub struct ComposerState {
    pub focused_field: ComposerField,
    pub author: String,
    pub title: String,
    pub content: String,
    pub category_index: usize,
}

impl ComposerState {
    pub fn new() -> Self {
        Self {
            focused_field: ComposerField::Author,
            author: String::new(),
            title: String::new(),
            content: String::new(),
            category_index: 0,
        }
    }

    pub fn category(&self) -> PostCategory {
        PostCategory::all()
            .get(self.category_index)
            .copied()
            .unwrap_or(PostCategory::Other)
    }

    pub fn cycle_category(&mut self, forward: bool) {
        self.category_index = cycle(self.category_index, PostCategory::all().len(), forward);
    }

    pub fn active_buffer(&mut self) -> Option<&mut String> {
        match self.focused_field {
            ComposerField::Author => Some(&mut self.author),
            ComposerField::Title => Some(&mut self.title),
            ComposerField::Content => Some(&mut self.content),
            ComposerField::Category => None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyField {
    Author,
    Content,
}

impl ReplyField {
    pub fn next(&self) -> Self {
        match self {
            ReplyField::Author => ReplyField::Content,
            ReplyField::Content => ReplyField::Author,
        }
    }
}

pub struct ReplyState {
    pub focused_field: ReplyField,
    pub author: String,
    pub content: String,
}

impl ReplyState {
    pub fn new() -> Self {
        Self {
            focused_field: ReplyField::Author,
            author: String::new(),
            content: String::new(),
        }
    }

    pub fn active_buffer(&mut self) -> &mut String {
        match self.focused_field {
            ReplyField::Author => &mut self.author,
            ReplyField::Content => &mut self.content,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

pub struct ForumState {
    /// 0 is the "All" sentinel, then `PostCategory::all()` offset by one.
    pub filter_index: usize,
    pub selected_index: usize,
    pub composer: ComposerState,
    pub reply: ReplyState,
}

impl ForumState {
    pub fn new() -> Self {
        Self {
            filter_index: 0,
            selected_index: 0,
            composer: ComposerState::new(),
            reply: ReplyState::new(),
        }
    }

    pub fn filter_category(&self) -> Option<PostCategory> {
        self.filter_index
            .checked_sub(1)
            .and_then(|i| PostCategory::all().get(i).copied())
    }

    pub fn cycle_filter(&mut self) {
        let len = PostCategory::all().len() + 1;
        self.filter_index = cycle(self.filter_index, len, true);
        self.selected_index = 0;
    }
}

fn cycle(index: usize, len: usize, forward: bool) -> usize {
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

pub fn select_next(index: &mut usize, max: usize) {
    if max > 0 && *index < max - 1 {
        *index += 1;
    }
}

pub fn select_prev(index: &mut usize) {
    if *index > 0 {
        *index -= 1;
    }
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    pub config: Config,

    // Reference data, loaded once through the repository seam
    pub crops: Vec<Crop>,
    pub fertilizers: Vec<Fertilizer>,
    pub pesticides: Vec<Pesticide>,

    // Forum
    pub forum: ForumStore,

    // Screen states
    pub crop_guide_state: CropGuideState,
    pub weather_state: WeatherState,
    pub recommendations_state: RecommendationsState,
    pub forum_state: ForumState,

    // Services
    pub advisory_engine: AdvisoryEngine,

    // UI state
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Config, repo: &dyn Repository) -> Result<Self> {
        let crops = repo.list_crops()?;
        let fertilizers = repo.list_fertilizers()?;
        let pesticides = repo.list_pesticides()?;
        let posts = repo.list_posts()?;

        Ok(Self {
            screen: Screen::Home,
            should_quit: false,
            config,
            crops,
            fertilizers,
            pesticides,
            forum: ForumStore::with_posts(posts),
            crop_guide_state: CropGuideState::new(),
            weather_state: WeatherState::new(),
            recommendations_state: RecommendationsState::new(),
            forum_state: ForumState::new(),
            advisory_engine: AdvisoryEngine::new(),
            status_message: None,
        })
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn filtered_crops(&self) -> Vec<&Crop> {
        filter_crops(&self.crops, &self.crop_guide_state.filter())
    }

    pub fn filtered_fertilizers(&self) -> Vec<&Fertilizer> {
        filter_fertilizers(
            &self.fertilizers,
            &self.recommendations_state.fertilizer_filter(),
        )
    }

    pub fn filtered_pesticides(&self) -> Vec<&Pesticide> {
        filter_pesticides(
            &self.pesticides,
            &self.recommendations_state.pesticide_filter(),
        )
    }

    pub fn visible_posts(&self) -> Vec<&ForumPost> {
        self.forum
            .filter_by_category(self.forum_state.filter_category())
    }

    pub fn advisories(&self) -> Vec<Advisory> {
        match &self.weather_state.snapshot {
            Some(snapshot) => self.advisory_engine.evaluate(snapshot),
            None => Vec::new(),
        }
    }

    pub fn crop_suggestions(&self) -> Option<&'static [&'static str]> {
        self.weather_state.snapshot.as_ref().map(recommended_crops)
    }

    /// Submit the post composer. A missing required field silently blocks
    /// submission, matching the form behavior.
    pub fn submit_post(&mut self) {
        let title = self.forum_state.composer.title.clone();
        let content = self.forum_state.composer.content.clone();
        let author = self.forum_state.composer.author.clone();
        let category = self.forum_state.composer.category();
        let created = self.forum.create_post(&title, &content, &author, category);
        if created.is_some() {
            self.forum_state.composer.clear();
            self.forum_state.selected_index = 0;
        }
    }

    /// Submit the reply form for the currently open post.
    pub fn submit_reply(&mut self) {
        let content = self.forum_state.reply.content.clone();
        let author = self.forum_state.reply.author.clone();
        if self.forum.create_reply(&content, &author).is_some() {
            self.forum_state.reply.clear();
        }
    }

    /// Open the detail view for the list row currently under the cursor.
    pub fn open_selected_post(&mut self) {
        let id = self
            .visible_posts()
            .get(self.forum_state.selected_index)
            .map(|p| p.id);
        if let Some(id) = id {
            self.forum.select_post(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgriTechError;
    use crate::models::AdvisoryCategory;
    use crate::storage::InMemoryRepository;
    use chrono::Utc;

    fn test_app() -> App {
        let repo = InMemoryRepository::new();
        App::new(Config::default(), &repo).unwrap()
    }

    fn snapshot(temperature_c: i32, humidity_percent: f64, wind_speed_ms: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            location: "Delhi".into(),
            temperature_c,
            description: "clear sky".into(),
            humidity_percent,
            wind_speed_ms,
            icon: "01d".into(),
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn screen_from_key() {
        assert_eq!(Screen::from_key('1'), Some(Screen::Home));
        assert_eq!(Screen::from_key('5'), Some(Screen::Forum));
        assert_eq!(Screen::from_key('9'), None);
    }

    #[test]
    fn failed_lookup_clears_snapshot_and_sets_error() {
        let mut app = test_app();
        app.weather_state.apply_result(Ok(snapshot(22, 50.0, 2.0)));
        assert!(app.weather_state.snapshot.is_some());
        assert!(app.weather_state.error.is_none());

        app.weather_state.apply_result(Err(AgriTechError::DataSourceUnavailable(
            "connection refused".into(),
        )));
        assert!(app.weather_state.snapshot.is_none());
        assert!(app.weather_state.error.is_some());
    }

    #[test]
    fn successful_lookup_clears_prior_error() {
        let mut app = test_app();
        app.weather_state
            .apply_result(Err(AgriTechError::DataSourceUnavailable("timeout".into())));
        app.weather_state.apply_result(Ok(snapshot(22, 50.0, 2.0)));
        assert!(app.weather_state.error.is_none());
        assert_eq!(
            app.weather_state.snapshot.as_ref().unwrap().location,
            "Delhi"
        );
    }

    #[test]
    fn blank_lookup_request_is_ignored() {
        let mut app = test_app();
        app.weather_state.request_lookup("   ");
        assert!(app.weather_state.take_pending_city().is_none());
        app.weather_state.request_lookup(" Pune ");
        assert_eq!(app.weather_state.take_pending_city().as_deref(), Some("Pune"));
    }

    #[test]
    fn advisories_empty_without_snapshot() {
        let app = test_app();
        assert!(app.advisories().is_empty());
        assert!(app.crop_suggestions().is_none());
    }

    #[test]
    fn advisories_follow_snapshot() {
        let mut app = test_app();
        app.weather_state.apply_result(Ok(snapshot(35, 40.0, 2.0)));
        let advisories = app.advisories();
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].category, AdvisoryCategory::Irrigation);
        assert_eq!(
            app.crop_suggestions().unwrap(),
            &["Rice", "Cotton", "Maize"]
        );
    }

    #[test]
    fn submit_post_requires_all_fields() {
        let mut app = test_app();
        let before = app.forum.posts().len();

        app.forum_state.composer.author = "Kiran Rao".into();
        app.forum_state.composer.title = String::new();
        app.forum_state.composer.content = "Where to buy certified seed?".into();
        app.submit_post();
        assert_eq!(app.forum.posts().len(), before);

        app.forum_state.composer.title = "Certified seed sources".into();
        app.submit_post();
        assert_eq!(app.forum.posts().len(), before + 1);
        // Composer resets after a successful submit.
        assert!(app.forum_state.composer.title.is_empty());
    }

    #[test]
    fn open_selected_post_respects_category_filter() {
        let mut app = test_app();
        // Filter to Pest Control; the only visible post is the seeded one.
        app.forum_state.filter_index = 1 + PostCategory::all()
            .iter()
            .position(|c| *c == PostCategory::PestControl)
            .unwrap();
        app.forum_state.selected_index = 0;
        app.open_selected_post();
        assert_eq!(
            app.forum.selected_post().unwrap().category,
            PostCategory::PestControl
        );
    }

    #[test]
    fn submit_reply_round_trip() {
        let mut app = test_app();
        app.forum.select_post(1);
        app.forum_state.reply.author = "Kiran Rao".into();
        app.forum_state.reply.content = "Soil testing first helps a lot.".into();
        let before = app.forum.selected_post().unwrap().replies.len();
        app.submit_reply();
        assert_eq!(app.forum.selected_post().unwrap().replies.len(), before + 1);
        assert!(app.forum_state.reply.content.is_empty());
    }
}
