//! Test doubles and common utilities for contract tests
//!
//! Provides a temporary source tree builder and a DnsProvider double that
//! answers with scripted HTTP statuses.

#![allow(dead_code)]

use repokit_core::config::RecordConfig;
use repokit_core::error::{Error, Result};
use repokit_core::traits::{DnsProvider, UpdateResult};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// A clean NestJS-style service that no fixer should touch
pub const CLEAN_SERVICE: &str = "import { Injectable } from '@nestjs/common';
import { PrismaService } from '../prisma/prisma.service';

@Injectable()
export class QuestionnaireService {
  constructor(private readonly prisma: PrismaService) {}

  async findAll() {
    return this.prisma.questionnaire.findMany({
      where: { deletedAt: null },
    });
  }
}
";

/// A barrel file made only of re-exports
pub const CLEAN_INDEX: &str = "export * from './questionnaire.service';
export * from './questionnaire.controller';
export { QuestionnaireModule } from './questionnaire.module';
";

/// A file with two top-level declarations and nothing repeated
pub const CLEAN_DTO: &str = "import { IsString } from 'class-validator';

export class CreateQuestionDto {
  @IsString()
  text: string;
}

export class UpdateQuestionDto {
  @IsString()
  text?: string;
}
";

/// Odd-length file whose halves nearly match but differ in one line
pub const NEAR_DUPLICATE: &str = "export enum Level {
  Low,
}
export enum Tier {
  Low,
}
export const DEFAULT_LEVEL = Level.Low;
";

/// A module whose header opens with a multi-line import, ending in a class
pub const MULTI_LINE_IMPORT_MODULE: &str = "import {
  Module,
} from '@nestjs/common';
import { QuizService } from './quiz.service';

@Module({ providers: [QuizService] })
export class QuizModule {}
";

/// A multi-line import header with no braces in the code below it
pub const MULTI_LINE_IMPORT_HANDLERS: &str = "import {
  A,
  B,
} from './x';
import { C } from './c';

export const handlers = [A, B, C];
";

/// All clean fixtures
pub fn clean_fixtures() -> Vec<(&'static str, &'static str)> {
    vec![
        ("questionnaire.service.ts", CLEAN_SERVICE),
        ("index.ts", CLEAN_INDEX),
        ("create-question.dto.ts", CLEAN_DTO),
        ("level.enum.ts", NEAR_DUPLICATE),
        ("quiz.module.ts", MULTI_LINE_IMPORT_MODULE),
        ("handlers.ts", MULTI_LINE_IMPORT_HANDLERS),
        ("empty.ts", ""),
        ("one-liner.ts", "export const A = 1;"),
    ]
}

/// Temporary repository with an `apps/api/src` and `libs` layout
pub struct SourceTree {
    dir: TempDir,
}

impl SourceTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the tree root
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().expect("file has a parent")).expect("create dirs");
        fs::write(&path, content).expect("write fixture");
        path
    }

    /// Read a file relative to the tree root
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative)).expect("read fixture")
    }
}

/// A DnsProvider that answers with a scripted status per record name
///
/// Mirrors the registrar contract: 200 and 201 are accepted, anything else is
/// an error carrying the status and a body.
pub struct ScriptedDnsProvider {
    statuses: HashMap<String, u16>,
    default_status: u16,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl ScriptedDnsProvider {
    pub fn new(default_status: u16) -> Self {
        Self {
            statuses: HashMap::new(),
            default_status,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn with_status(mut self, record_name: &str, status: u16) -> Self {
        self.statuses.insert(record_name.to_string(), status);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DnsProvider for ScriptedDnsProvider {
    async fn replace_record(&self, domain: &str, record: &RecordConfig) -> Result<UpdateResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push(format!("{} {}", record.record_type, record.fqdn(domain)));

        let status = self
            .statuses
            .get(&record.name)
            .copied()
            .unwrap_or(self.default_status);

        match status {
            200 | 201 => Ok(UpdateResult::Applied { status }),
            other => Err(Error::provider(
                "scripted",
                format!("{} - {{\"code\":\"REJECTED\"}}", other),
            )),
        }
    }

    fn supports_record(&self, record: &RecordConfig) -> bool {
        !record.name.is_empty()
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

/// Shares one scripted provider between the updater and the test
pub struct SharedProvider(pub std::sync::Arc<ScriptedDnsProvider>);

#[async_trait::async_trait]
impl DnsProvider for SharedProvider {
    async fn replace_record(&self, domain: &str, record: &RecordConfig) -> Result<UpdateResult> {
        self.0.replace_record(domain, record).await
    }

    fn supports_record(&self, record: &RecordConfig) -> bool {
        self.0.supports_record(record)
    }

    fn provider_name(&self) -> &'static str {
        self.0.provider_name()
    }
}
