//! Shared fixtures for integration tests.

use docbar_core::sidebar::RenderConfig;

pub fn cdf_config() -> RenderConfig {
    RenderConfig {
        base: "CDF".to_string(),
        host: "example.com".to_string(),
        path: "dist".to_string(),
        package: "cdf".to_string(),
        version: "1.2.0".to_string(),
    }
}

/// Exact fragment expected for [`cdf_config`].
pub const CDF_FRAGMENT: &str = r##"<div class="span3 sidebar">
   <div class="well" style="padding: 8px 0px; position: fixed;"">
      <ul class="nav nav-list">
         <li class="nav-header">Contents</li>
         <li><a href="#About">About CDF</a></li>
         <li><a href="#Requirements">System Requirements</a></li>
         <li><a href="#Unpacking">Unpacking the Package</a></li>
         <li><a href="#Using">Using the Tool</a></li>
         <li><a href="#Velocity">Using with Apache Velocity</a></li>
      </ul>
      <ul class="nav nav-list">
         <li class="nav-header">Quick Links</li>
         <li><a href="api/index.html">Class API</a></li>
         <li><a href="example/index.html">Examples</a></li>
         <li><a href="http://example.com/dist/cdf-1.2.0-dist.zip">Download</a></li>
         <li><a href="https://github.com/pdsdev/cdf">Source Code</a></li>
      </ul>
   </div><!-- well -->
   &nbsp;
</div><!-- sidebar -->
"##;
