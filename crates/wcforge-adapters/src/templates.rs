//! The built-in template set.
//!
//! Template bodies ship inside the binary; there is no on-disk template
//! directory to discover or configure. Keys are template-relative paths as
//! the generator's plan tables reference them. Bodies carry `{{token}}`
//! placeholders substituted at render time.

use wcforge_core::application::ApplicationError;
use wcforge_core::application::ports::TemplateSource;
use wcforge_core::error::WcforgeResult;

/// Template source backed by bodies compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }

    /// All template-relative paths in the set.
    pub fn paths() -> impl Iterator<Item = &'static str> {
        TEMPLATES.iter().map(|(path, _)| *path)
    }
}

impl TemplateSource for BuiltinTemplates {
    fn read(&self, template_path: &str) -> WcforgeResult<String> {
        TEMPLATES
            .iter()
            .find(|(path, _)| *path == template_path)
            .map(|(_, body)| body.to_string())
            .ok_or_else(|| {
                ApplicationError::TemplateMissing {
                    path: template_path.to_string(),
                }
                .into()
            })
    }
}

const TEMPLATES: [(&str, &str); 15] = [
    ("gen-tsd.json", GEN_TSD),
    ("polymer.json", POLYMER_JSON),
    ("index.html", INDEX_HTML),
    ("CONTRIBUTING.md", CONTRIBUTING),
    ("gitignore", GITIGNORE),
    ("tasks/ci.js", TASKS_CI),
    ("wct.conf.json", WCT_CONF),
    ("README.md", README),
    ("test/component-test.html", COMPONENT_TEST),
    ("package.json", PACKAGE_JSON),
    ("bower.json", BOWER_JSON),
    ("test/index.html", TEST_INDEX),
    ("demo/index.html", DEMO_INDEX),
    ("travis.yml", TRAVIS_YML),
    ("component.html", COMPONENT_HTML),
];

const GEN_TSD: &str = r#"{
  "forceGenerate": true,
  "excludeFiles": [
    "demo/**/*",
    "test/**/*",
    "tasks/**/*"
  ]
}
"#;

const POLYMER_JSON: &str = r#"{
  "entrypoint": "index.html",
  "shell": "{{moduleName}}.html",
  "lint": {
    "rules": [
      "polymer-2"
    ]
  }
}
"#;

const INDEX_HTML: &str = r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, minimum-scale=1.0, initial-scale=1.0, user-scalable=yes">
  <title>{{moduleName}}</title>
  <script src="../webcomponentsjs/webcomponents-lite.js"></script>
  <link rel="import" href="../iron-component-page/iron-component-page.html">
</head>
<body>
  <iron-component-page></iron-component-page>
</body>
</html>
"#;

const CONTRIBUTING: &str = r#"# Contributing

Thank you for taking the time to contribute to `{{moduleName}}`.

## Reporting issues

Please search existing issues before filing a new one. Include the component
version, the browser, and a minimal reproduction.

## Submitting changes

1. Fork the repository and create a topic branch.
2. Install dependencies with `npm install` (bower dependencies are installed
   automatically).
3. Make your change, with tests.
4. Run `npm test` and `npm run lint`.
5. Open a pull request describing the change.

By contributing you agree to license your work under the Apache-2.0 license.
"#;

const GITIGNORE: &str = r#"bower_components/
node_modules/
.idea/
.vscode/
*.log
"#;

const TASKS_CI: &str = r#"'use strict';

/**
 * CI helper for {{moduleName}}.
 *
 * Invoked from the CI pipeline after a successful build on a tagged commit
 * to regenerate typings and publish documentation artifacts.
 */
const {exec} = require('child_process');

function run(cmd) {
  return new Promise((resolve, reject) => {
    exec(cmd, (err, stdout) => {
      if (err) {
        reject(err);
        return;
      }
      resolve(stdout);
    });
  });
}

async function main() {
  await run('npm run update-types');
}

main().catch((cause) => {
  console.error(cause);
  process.exit(1);
});
"#;

const WCT_CONF: &str = r#"{
  "plugins": {
    "local": {
      "browsers": [
        "chrome",
        "firefox"
      ]
    }
  }
}
"#;

const README: &str = r#"# {{moduleName}}

{{moduleDescription}}

## Usage

```html
<link rel="import" href="bower_components/{{moduleName}}/{{moduleName}}.html">

<{{moduleName}}></{{moduleName}}>
```

## Development

```sh
npm install
polymer serve --open
```

## Tests

```sh
polymer test --plugin local
```

## License

Apache-2.0
"#;

const COMPONENT_TEST: &str = r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, minimum-scale=1.0, initial-scale=1.0, user-scalable=yes">
  <script src="../../webcomponentsjs/webcomponents-lite.js"></script>
  <script src="../../web-component-tester/browser.js"></script>
  <link rel="import" href="../{{moduleName}}.html">
</head>
<body>
  <test-fixture id="basic">
    <template>
      <{{moduleName}}></{{moduleName}}>
    </template>
  </test-fixture>

  <script>
    suite('basic', () => {
      test('instantiates the element', () => {
        const element = fixture('basic');
        assert.equal(element.nodeName.toLowerCase(), '{{moduleName}}');
      });
    });
  </script>
</body>
</html>
"#;

const PACKAGE_JSON: &str = r#"{
  "name": "{{moduleName}}",
  "version": "{{moduleVersion}}",
  "description": "{{moduleDescription}}",
  "license": "Apache-2.0",
  "main": "{{moduleName}}.html",
  "authors": [
    "The wcforge authors",
    "The Advanced Components authors <components@wcforge.dev>"
  ],
  "scripts": {
    "lint": "polymer lint {{moduleName}}.html",
    "test": "polymer test --plugin local",
    "test-sauce": "polymer test --plugin sauce --job-name \"{{moduleName}}:local-test\"",
    "update-types": "gen-typescript-declarations --deleteExisting --outDir ."
  },
  "devDependencies": {
    "@polymer/gen-typescript-declarations": "^1.1.1",
    "polymer-cli": "^1.7.0"
  }
}
"#;

const BOWER_JSON: &str = r#"{
  "name": "{{moduleName}}",
  "version": "{{moduleVersion}}",
  "description": "{{moduleDescription}}",
  "license": "Apache-2.0",
  "main": "{{moduleName}}.html",
  "authors": [
    "The wcforge authors",
    "The Advanced Components authors <components@wcforge.dev>"
  ],
  "dependencies": {
    "polymer": "Polymer/polymer#^2.0.0"
  },
  "devDependencies": {
    "iron-demo-helpers": "PolymerElements/iron-demo-helpers#^2.0.0",
    "web-component-tester": "Polymer/web-component-tester#^6.0.0",
    "webcomponentsjs": "webcomponents/webcomponentsjs#^1.0.0",
    "iron-component-page": "PolymerElements/iron-component-page#^3.0.0",
    "iron-test-helpers": "PolymerElements/iron-test-helpers#^2.0.0"
  },
  "ignore": [
    "demo",
    "test",
    "tasks"
  ]
}
"#;

const TEST_INDEX: &str = r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8">
  <script src="../../webcomponentsjs/webcomponents-lite.js"></script>
  <script src="../../web-component-tester/browser.js"></script>
</head>
<body>
  <script>
    WCT.loadSuites([
      '{{moduleName}}-test.html',
      '{{moduleName}}-test.html?dom=shadow'
    ]);
  </script>
</body>
</html>
"#;

const DEMO_INDEX: &str = r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, minimum-scale=1.0, initial-scale=1.0, user-scalable=yes">
  <title>{{moduleName}} demo</title>
  <script src="../../webcomponentsjs/webcomponents-lite.js"></script>
  <link rel="import" href="../../iron-demo-helpers/demo-pages-shared-styles.html">
  <link rel="import" href="../../iron-demo-helpers/demo-snippet.html">
  <link rel="import" href="../{{moduleName}}.html">
  <custom-style>
    <style is="custom-style" include="demo-pages-shared-styles"></style>
  </custom-style>
</head>
<body>
  <div class="vertical-section-container centered">
    <h3>Basic usage of the {{moduleName}} element</h3>
    <demo-snippet>
      <template>
        <{{moduleName}}></{{moduleName}}>
      </template>
    </demo-snippet>
  </div>
</body>
</html>
"#;

const TRAVIS_YML: &str = r#"language: node_js
node_js: stable
sudo: required
before_script:
- npm install -g polymer-cli
- polymer install
addons:
  firefox: latest
  apt:
    sources:
    - google-chrome
    packages:
    - google-chrome-stable
  sauce_connect: true
script:
- xvfb-run polymer test --plugin local
- polymer lint {{moduleName}}.html
- >-
  if [ "${TRAVIS_PULL_REQUEST}" = "false" ]; then polymer test --plugin sauce
  --job-name "{{moduleName}}:local-test" --build-number=${TRAVIS_BUILD_NUMBER};
  fi
cache:
  directories:
  - node_modules
after_success:
- node tasks/ci.js
"#;

const COMPONENT_HTML: &str = r#"<!--
@license
Copyright 2018 The Advanced Components authors

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
-->
<link rel="import" href="../polymer/polymer-element.html">

<dom-module id="{{moduleName}}">
  <template>
    <style>
      :host {
        display: block;
      }
    </style>
  </template>
  <script>
    /**
     * `<{{moduleName}}>` {{moduleDescription}}
     *
     * @customElement
     * @polymer
     * @demo demo/index.html
     */
    class {{moduleClassName}} extends Polymer.Element {
      static get is() {
        return '{{moduleName}}';
      }

      static get properties() {
        return {};
      }
    }
    window.customElements.define({{moduleClassName}}.is, {{moduleClassName}});
  </script>
</dom-module>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_path_resolves() {
        let templates = BuiltinTemplates::new();
        for path in BuiltinTemplates::paths() {
            assert!(templates.read(path).is_ok(), "missing body for {path}");
        }
    }

    #[test]
    fn unknown_path_is_reported() {
        let templates = BuiltinTemplates::new();
        let err = templates.read("no/such/template.html").unwrap_err();
        assert!(err.to_string().contains("no/such/template.html"));
    }

    #[test]
    fn component_body_uses_class_and_element_names() {
        let body = BuiltinTemplates::new().read("component.html").unwrap();
        assert!(body.contains("{{moduleClassName}}"));
        assert!(body.contains("dom-module id=\"{{moduleName}}\""));
    }

    #[test]
    fn fresh_manifest_carries_version_placeholder() {
        let body = BuiltinTemplates::new().read("package.json").unwrap();
        assert!(body.contains("\"version\": \"{{moduleVersion}}\""));
    }
}
