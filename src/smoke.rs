//! The fixed create-then-read sequence run against the test resource.

use std::io::Write;

use attohttpc::{ErrorKind, RequestBuilder, Result};
use http::header::{ACCEPT, CONTENT_TYPE};
use http::Method;
use url::Url;

use crate::fixture::ChildRecord;

/// Where the test resource lives on a default local deployment.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/candlepin/test/";

const BANNER_PREFIX: &str = "------------ TESTING";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// POST the literal [`ChildRecord`] and print the status line.
    Create,
    /// GET the resource and print its body.
    Fetch,
}

/// One request of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    /// Path relative to the base URL. Empty means the base itself.
    pub path: &'static str,
    pub banner: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        kind: StepKind::Create,
        path: "",
        banner: "json create",
    },
    Step {
        kind: StepKind::Fetch,
        path: "",
        banner: "json get",
    },
    Step {
        kind: StepKind::Fetch,
        path: "consumertype",
        banner: "json get consumertype",
    },
    Step {
        kind: StepKind::Fetch,
        path: "consumer",
        banner: "json get consumer",
    },
];

impl Step {
    pub fn method(&self) -> Method {
        match self.kind {
            StepKind::Create => Method::POST,
            StepKind::Fetch => Method::GET,
        }
    }

    /// Resolve this step's path against `base`.
    pub fn url(&self, base: &Url) -> Result<Url> {
        base.join(self.path).map_err(|_| ErrorKind::InvalidBaseUrl.into())
    }
}

/// Runs the sequence: one POST, then three GETs, stopping at the first failure.
#[derive(Debug, Clone)]
pub struct SmokeTest {
    base_url: Url,
}

impl SmokeTest {
    pub fn new() -> SmokeTest {
        SmokeTest {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
        }
    }

    /// Target another deployment of the test resource.
    ///
    /// A trailing slash is added to the path when missing so that step paths
    /// resolve below it.
    pub fn with_base_url<U: AsRef<str>>(base_url: U) -> Result<SmokeTest> {
        let mut base_url = Url::parse(base_url.as_ref()).map_err(|_| ErrorKind::InvalidBaseUrl)?;
        if base_url.cannot_be_a_base() || base_url.host_str().is_none() {
            return Err(ErrorKind::InvalidBaseUrl.into());
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(SmokeTest { base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn steps(&self) -> &'static [Step] {
        &STEPS
    }

    /// Execute every step in order, writing the transcript to `out`.
    ///
    /// Requests use the `attohttpc` defaults: 30 seconds to connect, 30 seconds per
    /// read and no overall deadline. A server that stalls longer than that surfaces
    /// as an `ErrorKind::Io` error.
    pub fn run<W: Write>(&self, mut out: W) -> Result {
        for step in self.steps() {
            let url = step.url(&self.base_url)?;
            writeln!(out, "{} {}", BANNER_PREFIX, step.banner)?;
            info!("{} {}", step.method(), url);

            match step.kind {
                StepKind::Create => self.create(&mut out, url)?,
                StepKind::Fetch => self.fetch(&mut out, url)?,
            }
        }
        Ok(())
    }

    fn create<W: Write>(&self, out: &mut W, url: Url) -> Result {
        let record = ChildRecord::literal();
        writeln!(out, "creating object with {}", record)?;

        let resp = RequestBuilder::try_new(Method::POST, &url)?
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&record)?
            .send()?;
        let status = resp.status();
        writeln!(
            out,
            "Status: {} Response: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or_default()
        )?;

        // The body is drained so the server sees a complete exchange; its content is not checked.
        let body = resp.bytes()?;
        debug!("create response body: {} bytes", body.len());
        Ok(())
    }

    fn fetch<W: Write>(&self, out: &mut W, url: Url) -> Result {
        let body = RequestBuilder::try_new(Method::GET, &url)?.send()?.text()?;
        writeln!(out, "testjsonobject get: {}", body)?;
        Ok(())
    }
}

impl Default for SmokeTest {
    fn default() -> Self {
        SmokeTest::new()
    }
}
