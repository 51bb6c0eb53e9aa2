//! ClickBench: a single wide `hits` table, 43 queries.

use super::{DdlDefinition, QueryDefinition, TableDefinition};

pub const TABLES: &[TableDefinition] = &[TableDefinition {
    placeholder: "HITS_TABLE",
    table: "hits",
}];

pub const QUERIES: &[QueryDefinition] = &[
    QueryDefinition {
        name: "clickbench-q1",
        sql: r#"SELECT COUNT(*) FROM {HITS_TABLE}"#,
    },
    QueryDefinition {
        name: "clickbench-q2",
        sql: r#"SELECT COUNT(*) FROM {HITS_TABLE} WHERE AdvEngineID <> 0"#,
    },
    QueryDefinition {
        name: "clickbench-q3",
        sql: r#"SELECT SUM(AdvEngineID), COUNT(*), AVG(ResolutionWidth) FROM {HITS_TABLE}"#,
    },
    QueryDefinition {
        name: "clickbench-q4",
        sql: r#"SELECT AVG(UserID) FROM {HITS_TABLE}"#,
    },
    QueryDefinition {
        name: "clickbench-q5",
        sql: r#"SELECT COUNT(DISTINCT UserID) FROM {HITS_TABLE}"#,
    },
    QueryDefinition {
        name: "clickbench-q6",
        sql: r#"SELECT COUNT(DISTINCT SearchPhrase) FROM {HITS_TABLE}"#,
    },
    QueryDefinition {
        name: "clickbench-q7",
        sql: r#"SELECT MIN(EventDate), MAX(EventDate) FROM {HITS_TABLE}"#,
    },
    QueryDefinition {
        name: "clickbench-q8",
        sql: r#"SELECT AdvEngineID, COUNT(*) FROM {HITS_TABLE} WHERE AdvEngineID <> 0 GROUP BY AdvEngineID ORDER BY COUNT(*) DESC"#,
    },
    QueryDefinition {
        name: "clickbench-q9",
        sql: r#"SELECT RegionID, COUNT(DISTINCT UserID) AS u FROM {HITS_TABLE} GROUP BY RegionID ORDER BY u DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q10",
        sql: r#"SELECT RegionID, SUM(AdvEngineID), COUNT(*) AS c, AVG(ResolutionWidth), COUNT(DISTINCT UserID) FROM {HITS_TABLE} GROUP BY RegionID ORDER BY c DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q11",
        sql: r#"SELECT MobilePhoneModel, COUNT(DISTINCT UserID) AS u FROM {HITS_TABLE} WHERE MobilePhoneModel <> '' GROUP BY MobilePhoneModel ORDER BY u DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q12",
        sql: r#"SELECT MobilePhone, MobilePhoneModel, COUNT(DISTINCT UserID) AS u FROM {HITS_TABLE} WHERE MobilePhoneModel <> '' GROUP BY MobilePhone, MobilePhoneModel ORDER BY u DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q13",
        sql: r#"SELECT SearchPhrase, COUNT(*) AS c FROM {HITS_TABLE} WHERE SearchPhrase <> '' GROUP BY SearchPhrase ORDER BY c DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q14",
        sql: r#"SELECT SearchPhrase, COUNT(DISTINCT UserID) AS u FROM {HITS_TABLE} WHERE SearchPhrase <> '' GROUP BY SearchPhrase ORDER BY u DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q15",
        sql: r#"SELECT SearchEngineID, SearchPhrase, COUNT(*) AS c FROM {HITS_TABLE} WHERE SearchPhrase <> '' GROUP BY SearchEngineID, SearchPhrase ORDER BY c DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q16",
        sql: r#"SELECT UserID, COUNT(*) FROM {HITS_TABLE} GROUP BY UserID ORDER BY COUNT(*) DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q17",
        sql: r#"SELECT UserID, SearchPhrase, COUNT(*) FROM {HITS_TABLE} GROUP BY UserID, SearchPhrase ORDER BY COUNT(*) DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q18",
        sql: r#"SELECT UserID, SearchPhrase, COUNT(*) FROM {HITS_TABLE} GROUP BY UserID, SearchPhrase LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q19",
        sql: r#"SELECT UserID, extract(minute FROM EventTime) AS m, SearchPhrase, COUNT(*) FROM {HITS_TABLE} GROUP BY UserID, m, SearchPhrase ORDER BY COUNT(*) DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q20",
        sql: r#"SELECT UserID FROM {HITS_TABLE} WHERE UserID = 435090932899640449"#,
    },
    QueryDefinition {
        name: "clickbench-q21",
        sql: r#"SELECT COUNT(*) FROM {HITS_TABLE} WHERE URL LIKE '%google%'"#,
    },
    QueryDefinition {
        name: "clickbench-q22",
        sql: r#"SELECT SearchPhrase, MIN(URL), COUNT(*) AS c FROM {HITS_TABLE} WHERE URL LIKE '%google%' AND SearchPhrase <> '' GROUP BY SearchPhrase ORDER BY c DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q23",
        sql: r#"SELECT SearchPhrase, MIN(URL), MIN(Title), COUNT(*) AS c, COUNT(DISTINCT UserID) FROM {HITS_TABLE} WHERE Title LIKE '%Google%' AND URL NOT LIKE '%.google.%' AND SearchPhrase <> '' GROUP BY SearchPhrase ORDER BY c DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q24",
        sql: r#"SELECT * FROM {HITS_TABLE} WHERE URL LIKE '%google%' ORDER BY EventTime LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q25",
        sql: r#"SELECT SearchPhrase FROM {HITS_TABLE} WHERE SearchPhrase <> '' ORDER BY EventTime LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q26",
        sql: r#"SELECT SearchPhrase FROM {HITS_TABLE} WHERE SearchPhrase <> '' ORDER BY SearchPhrase LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q27",
        sql: r#"SELECT SearchPhrase FROM {HITS_TABLE} WHERE SearchPhrase <> '' ORDER BY EventTime, SearchPhrase LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q28",
        sql: r#"SELECT CounterID, AVG(length(URL)) AS l, COUNT(*) AS c FROM {HITS_TABLE} WHERE URL <> '' GROUP BY CounterID HAVING COUNT(*) > 100000 ORDER BY l DESC LIMIT 25"#,
    },
    QueryDefinition {
        name: "clickbench-q29",
        sql: r#"SELECT REGEXP_REPLACE(Referer, '^https?://(www\.)?([^/]+)/.*$', '\2') AS k, AVG(length(Referer)) AS l, COUNT(*) AS c, MIN(Referer) FROM {HITS_TABLE} WHERE Referer <> '' GROUP BY k HAVING COUNT(*) > 100000 ORDER BY l DESC LIMIT 25"#,
    },
    QueryDefinition {
        name: "clickbench-q30",
        sql: r#"SELECT SUM(ResolutionWidth), SUM(ResolutionWidth + 1), SUM(ResolutionWidth + 2), SUM(ResolutionWidth + 3), SUM(ResolutionWidth + 4), SUM(ResolutionWidth + 5), SUM(ResolutionWidth + 6), SUM(ResolutionWidth + 7), SUM(ResolutionWidth + 8), SUM(ResolutionWidth + 9), SUM(ResolutionWidth + 10), SUM(ResolutionWidth + 11), SUM(ResolutionWidth + 12), SUM(ResolutionWidth + 13), SUM(ResolutionWidth + 14), SUM(ResolutionWidth + 15), SUM(ResolutionWidth + 16), SUM(ResolutionWidth + 17), SUM(ResolutionWidth + 18), SUM(ResolutionWidth + 19), SUM(ResolutionWidth + 20), SUM(ResolutionWidth + 21), SUM(ResolutionWidth + 22), SUM(ResolutionWidth + 23), SUM(ResolutionWidth + 24), SUM(ResolutionWidth + 25), SUM(ResolutionWidth + 26), SUM(ResolutionWidth + 27), SUM(ResolutionWidth + 28), SUM(ResolutionWidth + 29), SUM(ResolutionWidth + 30), SUM(ResolutionWidth + 31), SUM(ResolutionWidth + 32), SUM(ResolutionWidth + 33), SUM(ResolutionWidth + 34), SUM(ResolutionWidth + 35), SUM(ResolutionWidth + 36), SUM(ResolutionWidth + 37), SUM(ResolutionWidth + 38), SUM(ResolutionWidth + 39), SUM(ResolutionWidth + 40), SUM(ResolutionWidth + 41), SUM(ResolutionWidth + 42), SUM(ResolutionWidth + 43), SUM(ResolutionWidth + 44), SUM(ResolutionWidth + 45), SUM(ResolutionWidth + 46), SUM(ResolutionWidth + 47), SUM(ResolutionWidth + 48), SUM(ResolutionWidth + 49), SUM(ResolutionWidth + 50), SUM(ResolutionWidth + 51), SUM(ResolutionWidth + 52), SUM(ResolutionWidth + 53), SUM(ResolutionWidth + 54), SUM(ResolutionWidth + 55), SUM(ResolutionWidth + 56), SUM(ResolutionWidth + 57), SUM(ResolutionWidth + 58), SUM(ResolutionWidth + 59), SUM(ResolutionWidth + 60), SUM(ResolutionWidth + 61), SUM(ResolutionWidth + 62), SUM(ResolutionWidth + 63), SUM(ResolutionWidth + 64), SUM(ResolutionWidth + 65), SUM(ResolutionWidth + 66), SUM(ResolutionWidth + 67), SUM(ResolutionWidth + 68), SUM(ResolutionWidth + 69), SUM(ResolutionWidth + 70), SUM(ResolutionWidth + 71), SUM(ResolutionWidth + 72), SUM(ResolutionWidth + 73), SUM(ResolutionWidth + 74), SUM(ResolutionWidth + 75), SUM(ResolutionWidth + 76), SUM(ResolutionWidth + 77), SUM(ResolutionWidth + 78), SUM(ResolutionWidth + 79), SUM(ResolutionWidth + 80), SUM(ResolutionWidth + 81), SUM(ResolutionWidth + 82), SUM(ResolutionWidth + 83), SUM(ResolutionWidth + 84), SUM(ResolutionWidth + 85), SUM(ResolutionWidth + 86), SUM(ResolutionWidth + 87), SUM(ResolutionWidth + 88), SUM(ResolutionWidth + 89) FROM {HITS_TABLE}"#,
    },
    QueryDefinition {
        name: "clickbench-q31",
        sql: r#"SELECT SearchEngineID, ClientIP, COUNT(*) AS c, SUM(IsRefresh), AVG(ResolutionWidth) FROM {HITS_TABLE} WHERE SearchPhrase <> '' GROUP BY SearchEngineID, ClientIP ORDER BY c DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q32",
        sql: r#"SELECT WatchID, ClientIP, COUNT(*) AS c, SUM(IsRefresh), AVG(ResolutionWidth) FROM {HITS_TABLE} WHERE SearchPhrase <> '' GROUP BY WatchID, ClientIP ORDER BY c DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q33",
        sql: r#"SELECT WatchID, ClientIP, COUNT(*) AS c, SUM(IsRefresh), AVG(ResolutionWidth) FROM {HITS_TABLE} GROUP BY WatchID, ClientIP ORDER BY c DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q34",
        sql: r#"SELECT URL, COUNT(*) AS c FROM {HITS_TABLE} GROUP BY URL ORDER BY c DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q35",
        sql: r#"SELECT 1, URL, COUNT(*) AS c FROM {HITS_TABLE} GROUP BY 1, URL ORDER BY c DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q36",
        sql: r#"SELECT ClientIP, ClientIP - 1, ClientIP - 2, ClientIP - 3, COUNT(*) AS c FROM {HITS_TABLE} GROUP BY ClientIP, ClientIP - 1, ClientIP - 2, ClientIP - 3 ORDER BY c DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q37",
        sql: r#"SELECT URL, COUNT(*) AS PageViews FROM {HITS_TABLE} WHERE CounterID = 62 AND EventDate >= '2013-07-01' AND EventDate <= '2013-07-31' AND DontCountHits = 0 AND IsRefresh = 0 AND URL <> '' GROUP BY URL ORDER BY PageViews DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q38",
        sql: r#"SELECT Title, COUNT(*) AS PageViews FROM {HITS_TABLE} WHERE CounterID = 62 AND EventDate >= '2013-07-01' AND EventDate <= '2013-07-31' AND DontCountHits = 0 AND IsRefresh = 0 AND Title <> '' GROUP BY Title ORDER BY PageViews DESC LIMIT 10"#,
    },
    QueryDefinition {
        name: "clickbench-q39",
        sql: r#"SELECT URL, COUNT(*) AS PageViews FROM {HITS_TABLE} WHERE CounterID = 62 AND EventDate >= '2013-07-01' AND EventDate <= '2013-07-31' AND IsRefresh = 0 AND IsLink <> 0 AND IsDownload = 0 GROUP BY URL ORDER BY PageViews DESC LIMIT 10 OFFSET 1000"#,
    },
    QueryDefinition {
        name: "clickbench-q40",
        sql: r#"SELECT TraficSourceID, SearchEngineID, AdvEngineID, CASE WHEN (SearchEngineID = 0 AND AdvEngineID = 0) THEN Referer ELSE '' END AS Src, URL AS Dst, COUNT(*) AS PageViews FROM {HITS_TABLE} WHERE CounterID = 62 AND EventDate >= '2013-07-01' AND EventDate <= '2013-07-31' AND IsRefresh = 0 GROUP BY TraficSourceID, SearchEngineID, AdvEngineID, Src, Dst ORDER BY PageViews DESC LIMIT 10 OFFSET 1000"#,
    },
    QueryDefinition {
        name: "clickbench-q41",
        sql: r#"SELECT URLHash, EventDate, COUNT(*) AS PageViews FROM {HITS_TABLE} WHERE CounterID = 62 AND EventDate >= '2013-07-01' AND EventDate <= '2013-07-31' AND IsRefresh = 0 AND TraficSourceID IN (-1, 6) AND RefererHash = 3594120000172545465 GROUP BY URLHash, EventDate ORDER BY PageViews DESC LIMIT 10 OFFSET 100"#,
    },
    QueryDefinition {
        name: "clickbench-q42",
        sql: r#"SELECT WindowClientWidth, WindowClientHeight, COUNT(*) AS PageViews FROM {HITS_TABLE} WHERE CounterID = 62 AND EventDate >= '2013-07-01' AND EventDate <= '2013-07-31' AND IsRefresh = 0 AND DontCountHits = 0 AND URLHash = 2868770270353813622 GROUP BY WindowClientWidth, WindowClientHeight ORDER BY PageViews DESC LIMIT 10 OFFSET 10000"#,
    },
    QueryDefinition {
        name: "clickbench-q43",
        sql: r#"SELECT DATE_TRUNC('minute', EventTime) AS M, COUNT(*) AS PageViews FROM {HITS_TABLE} WHERE CounterID = 62 AND EventDate >= '2013-07-14' AND EventDate <= '2013-07-15' AND IsRefresh = 0 AND DontCountHits = 0 GROUP BY DATE_TRUNC('minute', EventTime) ORDER BY DATE_TRUNC('minute', EventTime) LIMIT 10 OFFSET 1000"#,
    },
];

pub const DDL: &[DdlDefinition] = &[
    DdlDefinition {
        table: "hits",
        sql: r#"
CREATE OR REPLACE TABLE {HITS_TABLE} (
  WatchID BIGINT,
  JavaEnable SMALLINT,
  Title VARCHAR,
  GoodEvent SMALLINT,
  EventTime BIGINT,
  EventDate SMALLINT,
  CounterID INTEGER,
  ClientIP INTEGER,
  RegionID INTEGER,
  UserID BIGINT,
  CounterClass SMALLINT,
  OS SMALLINT,
  UserAgent SMALLINT,
  URL VARCHAR,
  Referer VARCHAR,
  IsRefresh SMALLINT,
  RefererCategoryID SMALLINT,
  RefererRegionID INTEGER,
  URLCategoryID SMALLINT,
  URLRegionID INTEGER,
  ResolutionWidth SMALLINT,
  ResolutionHeight SMALLINT,
  ResolutionDepth SMALLINT,
  FlashMajor SMALLINT,
  FlashMinor SMALLINT,
  FlashMinor2 VARCHAR,
  NetMajor SMALLINT,
  NetMinor SMALLINT,
  UserAgentMajor SMALLINT,
  UserAgentMinor VARCHAR,
  CookieEnable SMALLINT,
  JavascriptEnable SMALLINT,
  IsMobile SMALLINT,
  MobilePhone SMALLINT,
  MobilePhoneModel VARCHAR,
  Params VARCHAR,
  IPNetworkID INTEGER,
  TraficSourceID SMALLINT,
  SearchEngineID SMALLINT,
  SearchPhrase VARCHAR,
  AdvEngineID SMALLINT,
  IsArtifical SMALLINT,
  WindowClientWidth SMALLINT,
  WindowClientHeight SMALLINT,
  ClientTimeZone SMALLINT,
  ClientEventTime BIGINT,
  SilverlightVersion1 SMALLINT,
  SilverlightVersion2 SMALLINT,
  SilverlightVersion3 INTEGER,
  SilverlightVersion4 SMALLINT,
  PageCharset VARCHAR,
  CodeVersion INTEGER,
  IsLink SMALLINT,
  IsDownload SMALLINT,
  IsNotBounce SMALLINT,
  FUniqID BIGINT,
  OriginalURL VARCHAR,
  HID INTEGER,
  IsOldCounter SMALLINT,
  IsEvent SMALLINT,
  IsParameter SMALLINT,
  DontCountHits SMALLINT,
  WithHash SMALLINT,
  HitColor VARCHAR,
  LocalEventTime BIGINT,
  Age SMALLINT,
  Sex SMALLINT,
  Income SMALLINT,
  Interests SMALLINT,
  Robotness SMALLINT,
  RemoteIP INTEGER,
  WindowName INTEGER,
  OpenerName INTEGER,
  HistoryLength SMALLINT,
  BrowserLanguage VARCHAR,
  BrowserCountry VARCHAR,
  SocialNetwork VARCHAR,
  SocialAction VARCHAR,
  HTTPError SMALLINT,
  SendTiming INTEGER,
  DNSTiming INTEGER,
  ConnectTiming INTEGER,
  ResponseStartTiming INTEGER,
  ResponseEndTiming INTEGER,
  FetchTiming INTEGER,
  SocialSourceNetworkID SMALLINT,
  SocialSourcePage VARCHAR,
  ParamPrice BIGINT,
  ParamOrderID VARCHAR,
  ParamCurrency VARCHAR,
  ParamCurrencyID SMALLINT,
  OpenstatServiceName VARCHAR,
  OpenstatCampaignID VARCHAR,
  OpenstatAdID VARCHAR,
  OpenstatSourceID VARCHAR,
  UTMSource VARCHAR,
  UTMMedium VARCHAR,
  UTMCampaign VARCHAR,
  UTMContent VARCHAR,
  UTMTerm VARCHAR,
  FromTag VARCHAR,
  HasGCLID SMALLINT,
  RefererHash BIGINT,
  URLHash BIGINT,
  CLID INTEGER
);
"#,
    },
];
