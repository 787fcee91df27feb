//! Résumé documents: an HTML view per locale and track, plus a PDF download.

use crate::effect::Effect;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CvTrack {
    Unity,
    Dotnet,
}

impl CvTrack {
    pub const ALL: [CvTrack; 2] = [CvTrack::Unity, CvTrack::Dotnet];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "unity" => Some(CvTrack::Unity),
            "dotnet" => Some(CvTrack::Dotnet),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CvTrack::Unity => "unity",
            CvTrack::Dotnet => "dotnet",
        }
    }

    /// File-name stem shared by the HTML and PDF documents.
    pub fn stem(self) -> &'static str {
        match self {
            CvTrack::Unity => "Unity_GameDeveloper",
            CvTrack::Dotnet => "DotNet_Developer",
        }
    }
}

impl fmt::Display for CvTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the CV documents live and which locales ship their own copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvPaths {
    pub html_dir: String,
    pub pdf_dir: String,
    pub locales: Vec<String>,
    pub default_locale: String,
}

impl CvPaths {
    /// Upper-cased document language for `locale`.
    fn lang(&self, locale: &str) -> String {
        let lang = if self.locales.iter().any(|l| l == locale) {
            locale
        } else {
            &self.default_locale
        };
        lang.to_uppercase()
    }

    fn join(dir: &str, file: &str) -> String {
        let dir = dir.trim_end_matches('/');
        if dir.is_empty() {
            file.to_string()
        } else {
            format!("{dir}/{file}")
        }
    }

    pub fn html(&self, track: CvTrack, locale: &str) -> String {
        let file = format!("CV_LONG_{}_{}.html", self.lang(locale), track.stem());
        Self::join(&self.html_dir, &file)
    }

    pub fn pdf(&self, track: CvTrack, locale: &str) -> String {
        let file = format!("CV_{}_{}.pdf", self.lang(locale), track.stem());
        Self::join(&self.pdf_dir, &file)
    }

    /// Every (html, pdf) pair the page can link to.
    pub fn all_documents(&self) -> Vec<(CvTrack, String, String)> {
        let mut locales: Vec<&str> = self.locales.iter().map(String::as_str).collect();
        if !locales.contains(&self.default_locale.as_str()) {
            locales.push(&self.default_locale);
        }
        locales
            .into_iter()
            .flat_map(|locale| {
                CvTrack::ALL
                    .into_iter()
                    .map(move |track| (track, self.html(track, locale), self.pdf(track, locale)))
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct CvViewer {
    paths: CvPaths,
    open: Option<CvTrack>,
}

impl CvViewer {
    pub fn new(paths: CvPaths) -> Self {
        Self { paths, open: None }
    }

    pub fn paths(&self) -> &CvPaths {
        &self.paths
    }

    pub fn open_track(&self) -> Option<CvTrack> {
        self.open
    }

    pub fn open(&mut self, track: CvTrack, locale: &str) -> Vec<Effect> {
        self.open = Some(track);
        vec![Effect::ShowCv {
            src: self.paths.html(track, locale),
        }]
    }

    /// Reload the open document in the new locale.
    pub fn locale_changed(&self, locale: &str) -> Vec<Effect> {
        match self.open {
            Some(track) => vec![Effect::ShowCv {
                src: self.paths.html(track, locale),
            }],
            None => Vec::new(),
        }
    }

    /// Download `track`, or the open track when `None`.
    pub fn download(&self, track: Option<CvTrack>, locale: &str) -> Vec<Effect> {
        let Some(track) = track.or(self.open) else {
            return Vec::new();
        };
        let href = self.paths.pdf(track, locale);
        let filename = href.rsplit('/').next().unwrap_or(&href).to_string();
        vec![Effect::Download { href, filename }]
    }

    pub fn close(&mut self) -> Vec<Effect> {
        match self.open.take() {
            Some(_) => vec![Effect::HideCv],
            None => Vec::new(),
        }
    }
}
