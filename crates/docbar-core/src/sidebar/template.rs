//! Fixed markup of the sidebar fragment.
//!
//! The page stylesheet and in-page anchors depend on this text byte-for-byte,
//! including the stray quote after `position: fixed;`.

/// Lines before the "About" anchor.
pub(super) const OPENING: [&str; 4] = [
    r##"<div class="span3 sidebar">"##,
    r##"   <div class="well" style="padding: 8px 0px; position: fixed;"">"##,
    r##"      <ul class="nav nav-list">"##,
    r##"         <li class="nav-header">Contents</li>"##,
];

/// Lines between the "About" anchor and the download link.
pub(super) const MIDDLE: [&str; 9] = [
    r##"         <li><a href="#Requirements">System Requirements</a></li>"##,
    r##"         <li><a href="#Unpacking">Unpacking the Package</a></li>"##,
    r##"         <li><a href="#Using">Using the Tool</a></li>"##,
    r##"         <li><a href="#Velocity">Using with Apache Velocity</a></li>"##,
    r##"      </ul>"##,
    r##"      <ul class="nav nav-list">"##,
    r##"         <li class="nav-header">Quick Links</li>"##,
    r##"         <li><a href="api/index.html">Class API</a></li>"##,
    r##"         <li><a href="example/index.html">Examples</a></li>"##,
];

/// Lines after the download link.
pub(super) const CLOSING: [&str; 5] = [
    r##"         <li><a href="https://github.com/pdsdev/cdf">Source Code</a></li>"##,
    r##"      </ul>"##,
    r##"   </div><!-- well -->"##,
    r##"   &nbsp;"##,
    r##"</div><!-- sidebar -->"##,
];

pub(super) fn about_line(base: &str) -> String {
    format!(r##"         <li><a href="#About">About {base}</a></li>"##)
}

pub(super) fn download_line(url: &str) -> String {
    format!(r##"         <li><a href="{url}">Download</a></li>"##)
}
