#![allow(dead_code)]

use std::path::Path;

use serde_json::Value;
use swagger_trim::output::read_gzip;

pub struct TestFixtures;

impl TestFixtures {
    /// A cut-down Kubernetes swagger document
    pub fn get_swagger_json() -> Vec<u8> {
        br##"{
  "swagger": "2.0",
  "info": {"title": "Kubernetes", "version": "v1.20.2", "description": "Kubernetes API"},
  "paths": {
    "/api/v1/namespaces": {
      "description": "namespaces",
      "get": {
        "description": "list or watch objects of kind Namespace",
        "consumes": ["*/*"],
        "produces": ["application/json", "application/yaml"],
        "parameters": [
          {"name": "limit", "in": "query", "type": "integer", "uniqueItems": true,
           "description": "limit is a maximum number of responses to return"}
        ],
        "responses": {
          "200": {"description": "OK", "schema": {"$ref": "#/definitions/io.k8s.api.core.v1.NamespaceList"}},
          "401": {"description": "Unauthorized"}
        },
        "x-kubernetes-action": "list"
      }
    }
  },
  "definitions": {
    "io.k8s.api.core.v1.NamespaceList": {
      "description": "NamespaceList is a list of Namespaces.",
      "required": ["items"],
      "properties": {
        "apiVersion": {"type": "string", "description": "APIVersion defines the versioned schema"},
        "items": {"type": "array", "items": {"$ref": "#/definitions/io.k8s.api.core.v1.Namespace"}}
      },
      "x-kubernetes-group-version-kind": [{"group": "", "kind": "NamespaceList", "version": "v1"}]
    }
  }
}"##
        .to_vec()
    }

    pub fn get_malformed_json() -> Vec<u8> {
        b"{\"swagger\": \"2.0\", \"paths\": ".to_vec()
    }

    /// Decompresses and decodes a written snapshot
    pub fn read_snapshot(path: &Path) -> Value {
        serde_json::from_slice(&read_gzip(path).expect("snapshot readable")).expect("snapshot decodes")
    }
}
